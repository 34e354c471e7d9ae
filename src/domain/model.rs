use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ORKG 資源識別碼，例如 `R12345`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for ResourceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UriKind {
    Canonical,
    Doi,
    Standard,
}

impl UriKind {
    pub fn label(&self) -> &'static str {
        match self {
            UriKind::Canonical => "ORKG URI",
            UriKind::Doi => "DOI",
            UriKind::Standard => "Standard URI",
        }
    }
}

/// Related URIs of one graph resource.
///
/// `canonical_uri` is set only when resolution succeeded. The two other fields
/// are independent extras and may be missing even then.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUris {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_uri: Option<String>,
}

impl ResolvedUris {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn resolved(
        canonical_uri: String,
        doi_uri: Option<String>,
        std_uri: Option<String>,
    ) -> Self {
        Self {
            canonical_uri: Some(canonical_uri),
            doi_uri,
            std_uri,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.canonical_uri.is_some()
    }

    pub fn get(&self, kind: UriKind) -> Option<&str> {
        let uri = match kind {
            UriKind::Canonical => &self.canonical_uri,
            UriKind::Doi => &self.doi_uri,
            UriKind::Standard => &self.std_uri,
        };
        uri.as_deref()
    }

    /// Available URIs in canonical, DOI, standard order. Empty when invalid.
    pub fn targets(&self) -> Vec<(UriKind, &str)> {
        if !self.is_valid() {
            return Vec::new();
        }
        [UriKind::Canonical, UriKind::Doi, UriKind::Standard]
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|uri| (kind, uri)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementBundle {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Statement {
    #[serde(default)]
    pub predicate: Option<Predicate>,
    #[serde(default)]
    pub object: Option<StatementObject>,
}

impl Statement {
    pub fn predicate_id(&self) -> Option<&str> {
        self.predicate.as_ref()?.id.as_deref()
    }

    pub fn object_label(&self) -> Option<&str> {
        self.object.as_ref()?.label.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Predicate {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementObject {
    #[serde(default)]
    pub label: Option<String>,
}

/// One assessed FAIR sub-criterion, after validation of the raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub metric: String,
    pub score: i64,
    pub recommendation: String,
    pub comment: String,
    pub target_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: String,
    pub description: String,
    pub score: i64,
    pub success: bool,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FairnessReport {
    pub percentage: f64,
    pub evaluation_score: i64,
    pub max_score: i64,
    pub assessed_uri: Option<String>,
    pub rows: Vec<MetricRow>,
    pub assessed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FairnessDisplay {
    Failure { message: String },
    Report(FairnessReport),
}

impl FairnessDisplay {
    pub fn is_failure(&self) -> bool {
        matches!(self, FairnessDisplay::Failure { .. })
    }

    pub fn report(&self) -> Option<&FairnessReport> {
        match self {
            FairnessDisplay::Report(report) => Some(report),
            FairnessDisplay::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resolution_has_no_targets() {
        let uris = ResolvedUris::empty();
        assert!(!uris.is_valid());
        assert!(uris.targets().is_empty());
    }

    #[test]
    fn test_targets_keep_display_order() {
        let uris = ResolvedUris::resolved(
            "https://orkg.org/resource/R1".to_string(),
            None,
            Some("https://example.org/paper".to_string()),
        );
        let kinds: Vec<UriKind> = uris.targets().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![UriKind::Canonical, UriKind::Standard]);
    }

    #[test]
    fn test_statement_tolerates_missing_fields() {
        let bundle: StatementBundle = serde_json::from_value(serde_json::json!({
            "statements": [
                {"predicate": {"id": "P26"}},
                {"object": {"label": "x"}},
                {}
            ]
        }))
        .unwrap();
        assert_eq!(bundle.statements.len(), 3);
        assert_eq!(bundle.statements[0].predicate_id(), Some("P26"));
        assert_eq!(bundle.statements[0].object_label(), None);
        assert_eq!(bundle.statements[1].predicate_id(), None);
    }

    #[test]
    fn test_resolved_uris_json_skips_missing() {
        let uris = ResolvedUris::resolved("https://orkg.org/resource/R1".to_string(), None, None);
        let json = serde_json::to_value(&uris).unwrap();
        assert_eq!(json, serde_json::json!({"canonical_uri": "https://orkg.org/resource/R1"}));
    }
}
