use crate::core::http::build_client;
use crate::domain::ports::{ConfigProvider, FairnessAssessor};
use crate::utils::error::{FairError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub struct FairCheckerClient {
    client: Client,
    base_url: String,
}

impl FairCheckerClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.assessor_base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FairnessAssessor for FairCheckerClient {
    async fn assess_all(&self, uri: &str) -> Result<serde_json::Value> {
        let url = format!("{}/api/check/metrics_all", self.base_url);
        tracing::debug!("Requesting FAIR-Checker metrics for {}", uri);

        let response = self.client.get(&url).query(&[("url", uri)]).send().await?;

        let status = response.status();
        tracing::debug!("FAIR-Checker response status: {}", status);
        if !status.is_success() {
            return Err(FairError::UpstreamStatusError {
                service: "FAIR-Checker".to_string(),
                status: status.as_u16(),
            });
        }

        // 結構不在這裡驗證，交給 scoring
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

pub async fn try_evaluate<A: FairnessAssessor + ?Sized>(
    assessor: &A,
    uri: &str,
) -> Result<serde_json::Value> {
    assessor.assess_all(uri).await
}

/// Raw assessment response, or `None` after logging the failure.
pub async fn evaluate<A: FairnessAssessor + ?Sized>(
    assessor: &A,
    uri: &str,
) -> Option<serde_json::Value> {
    match try_evaluate(assessor, uri).await {
        Ok(response) => {
            tracing::info!("✅ FAIR-Checker evaluation succeeded - URI: {}", uri);
            tracing::debug!("FAIR-Checker response: {}", response);
            Some(response)
        }
        Err(e) => {
            tracing::warn!(
                "❌ FAIR-Checker evaluation failed - URI: {}: {} (Category: {:?})",
                uri,
                e,
                e.category()
            );
            None
        }
    }
}
