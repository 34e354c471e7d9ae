use crate::domain::model::ResourceId;
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_GRAPH_HOST: &str = "orkg.org";

/// Extracts resource ids from `(http|https)://<host>/<kind>/<R…>` URIs.
#[derive(Debug, Clone)]
pub struct ResourceIdParser {
    pattern: Regex,
}

impl ResourceIdParser {
    pub fn new(host: &str) -> Self {
        // host 是設定值，必須逐字比對
        let pattern = format!(
            r"^(?:https|http)://{}/(?:resource|paper|contribution|comparison)/(R[A-Z0-9]+)$",
            regex::escape(host)
        );
        Self {
            pattern: Regex::new(&pattern).expect("resource uri pattern is valid"),
        }
    }

    /// Host of `base_url`, or the default graph host when it has none.
    pub fn for_base_url(base_url: &str) -> Self {
        let host = url::Url::parse(base_url)
            .ok()
            .and_then(|url| {
                url.host_str().map(|h| match url.port() {
                    Some(port) => format!("{}:{}", h, port),
                    None => h.to_string(),
                })
            })
            .unwrap_or_else(|| DEFAULT_GRAPH_HOST.to_string());
        Self::new(&host)
    }

    pub fn parse(&self, input: &str) -> Option<ResourceId> {
        self.pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| ResourceId::new(m.as_str()))
    }
}

impl Default for ResourceIdParser {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_HOST)
    }
}

/// Parses against the default `orkg.org` host.
pub fn parse_resource_id(input: &str) -> Option<ResourceId> {
    static PARSER: OnceLock<ResourceIdParser> = OnceLock::new();
    PARSER.get_or_init(ResourceIdParser::default).parse(input)
}
