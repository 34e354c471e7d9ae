use crate::domain::model::{ResourceId, StatementBundle};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn graph_base_url(&self) -> &str;
    fn assessor_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

/// Fetches the statement bundle of a graph resource.
#[async_trait]
pub trait ResourceLookup: Send + Sync {
    fn canonical_uri(&self, id: &ResourceId) -> String;
    async fn fetch_bundle(&self, id: &ResourceId) -> Result<StatementBundle>;
}

/// Runs every FAIR metric against one URI and returns the raw response.
#[async_trait]
pub trait FairnessAssessor: Send + Sync {
    async fn assess_all(&self, uri: &str) -> Result<serde_json::Value>;
}
