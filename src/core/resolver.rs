use crate::core::http::build_client;
use crate::domain::model::{ResolvedUris, ResourceId, Statement, StatementBundle};
use crate::domain::ports::{ConfigProvider, ResourceLookup};
use crate::utils::error::{FairError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// ORKG predicate linking a paper to its DOI.
pub const DOI_PREDICATE_ID: &str = "P26";
/// ORKG predicate linking a resource to an external URL.
pub const URL_PREDICATE_ID: &str = "url";
pub const BUNDLE_MAX_LEVEL: u8 = 2;

pub struct OrkgResolver {
    client: Client,
    base_url: String,
}

impl OrkgResolver {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.graph_base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn bundle_url(&self, id: &ResourceId) -> String {
        format!("{}/api/statements/{}/bundle/", self.base_url, id)
    }
}

#[async_trait]
impl ResourceLookup for OrkgResolver {
    fn canonical_uri(&self, id: &ResourceId) -> String {
        format!("{}/resource/{}", self.base_url, id)
    }

    async fn fetch_bundle(&self, id: &ResourceId) -> Result<StatementBundle> {
        let url = self.bundle_url(id);
        tracing::debug!("Fetching statement bundle: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("maxLevel", BUNDLE_MAX_LEVEL)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("ORKG API response status: {}", status);
        if !status.is_success() {
            return Err(FairError::UpstreamStatusError {
                service: "ORKG API".to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let bundle: StatementBundle = serde_json::from_slice(&body)?;
        Ok(bundle)
    }
}

/// 單次掃描取得 DOI 與標準 URL，兩者都找到就停止。
/// 空的 statement 列表代表資源無效。
pub fn extract_related_uris(canonical_uri: String, statements: &[Statement]) -> ResolvedUris {
    if statements.is_empty() {
        return ResolvedUris::empty();
    }

    let mut doi_uri: Option<String> = None;
    let mut std_uri: Option<String> = None;

    for statement in statements {
        if doi_uri.is_some() && std_uri.is_some() {
            break;
        }
        let (Some(predicate), Some(label)) = (statement.predicate_id(), statement.object_label())
        else {
            continue;
        };
        if label.is_empty() {
            continue;
        }
        if doi_uri.is_none() && predicate == DOI_PREDICATE_ID {
            doi_uri = Some(label.to_string());
        }
        if std_uri.is_none() && predicate == URL_PREDICATE_ID {
            std_uri = Some(label.to_string());
        }
    }

    ResolvedUris::resolved(canonical_uri, doi_uri, std_uri)
}

pub async fn try_resolve<L: ResourceLookup + ?Sized>(
    lookup: &L,
    id: &ResourceId,
) -> Result<ResolvedUris> {
    let bundle = lookup.fetch_bundle(id).await?;
    Ok(extract_related_uris(lookup.canonical_uri(id), &bundle.statements))
}

/// Never fails: errors are logged and mapped to [`ResolvedUris::empty`].
pub async fn resolve<L: ResourceLookup + ?Sized>(lookup: &L, id: &ResourceId) -> ResolvedUris {
    match try_resolve(lookup, id).await {
        Ok(uris) if uris.is_valid() => {
            tracing::info!("✅ ORKG API fetch succeeded [ResourceId: {}]", id);
            tracing::debug!("Resolved URIs: {:?}", uris);
            uris
        }
        Ok(uris) => {
            tracing::warn!(
                "ORKG API returned no statements for {}, treating as invalid resource",
                id
            );
            uris
        }
        Err(e) => {
            tracing::warn!(
                "❌ ORKG API fetch failed [ResourceId: {}]: {} (Category: {:?})",
                id,
                e,
                e.category()
            );
            ResolvedUris::empty()
        }
    }
}
