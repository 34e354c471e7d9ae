use crate::config::{Settings, TomlConfig};
use crate::domain::model::UriKind;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum AssessTarget {
    All,
    Canonical,
    Doi,
    Standard,
    #[value(name = "none")]
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "orkg-fair")]
#[command(about = "Resolve an ORKG resource and assess its FAIRness with FAIR-Checker")]
pub struct CliConfig {
    /// ORKG resource URI, e.g. https://orkg.org/paper/R12345
    pub uri: String,

    /// Which resolved URIs to assess
    #[arg(long, value_enum, value_delimiter = ',', default_value = "all")]
    pub assess: Vec<AssessTarget>,

    /// Assess the given URI directly, without resolving it through ORKG
    #[arg(long)]
    pub direct: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, env = "ORKG_GRAPH_URL")]
    pub graph_url: Option<String>,

    #[arg(long, env = "FAIR_CHECKER_URL")]
    pub assessor_url: Option<String>,

    #[arg(long, env = "FAIR_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then flags and environment.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            settings = settings.merge_file(&TomlConfig::from_file(path)?);
        }
        if let Some(url) = &self.graph_url {
            settings.graph_base_url = url.clone();
        }
        if let Some(url) = &self.assessor_url {
            settings.assessor_base_url = url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }

        Ok(settings)
    }

    /// Requested URI kinds in display order, without duplicates.
    pub fn targets(&self) -> Vec<UriKind> {
        if self.assess.contains(&AssessTarget::Skip) {
            return Vec::new();
        }
        let all = self.assess.contains(&AssessTarget::All);
        [
            (UriKind::Canonical, AssessTarget::Canonical),
            (UriKind::Doi, AssessTarget::Doi),
            (UriKind::Standard, AssessTarget::Standard),
        ]
        .into_iter()
        .filter(|(_, target)| all || self.assess.contains(target))
        .map(|(kind, _)| kind)
        .collect()
    }
}
