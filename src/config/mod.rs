#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_base_url, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const DEFAULT_GRAPH_BASE_URL: &str = "https://orkg.org";
pub const DEFAULT_ASSESSOR_BASE_URL: &str = "https://fair-checker.france-bioinformatique.fr";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Effective configuration after merging defaults, file and flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub graph_base_url: String,
    pub assessor_base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            assessor_base_url: DEFAULT_ASSESSOR_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// 檔案中有設定的欄位覆蓋目前值
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(endpoints) = &file.endpoints {
            if let Some(url) = &endpoints.graph_base_url {
                self.graph_base_url = url.clone();
            }
            if let Some(url) = &endpoints.assessor_base_url {
                self.assessor_base_url = url.clone();
            }
        }
        if let Some(http) = &file.http {
            if let Some(timeout) = http.timeout_seconds {
                self.timeout_seconds = timeout;
            }
            if let Some(agent) = &http.user_agent {
                self.user_agent = agent.clone();
            }
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn graph_base_url(&self) -> &str {
        &self.graph_base_url
    }

    fn assessor_base_url(&self) -> &str {
        &self.assessor_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_base_url("endpoints.graph_base_url", &self.graph_base_url)?;
        validate_base_url("endpoints.assessor_base_url", &self.assessor_base_url)?;
        validate_range(
            "http.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validate_non_empty_string("http.user_agent", &self.user_agent)?;
        Ok(())
    }
}
