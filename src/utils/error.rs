use thiserror::Error;

#[derive(Error, Debug)]
pub enum FairError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{service} returned HTTP {status}")]
    UpstreamStatusError { service: String, status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FairError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FairError::ApiError(_) => ErrorCategory::Network,
            FairError::UpstreamStatusError { .. } => ErrorCategory::Upstream,
            FairError::IoError(_) | FairError::SerializationError(_) => ErrorCategory::Data,
            FairError::ConfigError { .. }
            | FairError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FairError::ApiError(_) | FairError::UpstreamStatusError { .. } => {
                ErrorSeverity::Medium
            }
            FairError::SerializationError(_) => ErrorSeverity::High,
            FairError::IoError(_)
            | FairError::ConfigError { .. }
            | FairError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Upstream => "The remote service may be down, try again later",
            ErrorCategory::Data => "The remote service returned unexpected data",
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
        }
    }

    /// Process exit code for an error that aborts the binary. Never 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FairError::ApiError(e) if e.is_timeout() => "The request timed out".to_string(),
            FairError::ApiError(_) => "Could not reach the remote service".to_string(),
            FairError::UpstreamStatusError { service, status } => {
                format!("{} answered with HTTP {}", service, status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_critical() {
        let err = FairError::InvalidConfigValueError {
            field: "endpoints.graph_base_url".to_string(),
            value: "ftp://orkg.org".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_upstream_status_message() {
        let err = FairError::UpstreamStatusError {
            service: "FAIR-Checker".to_string(),
            status: 503,
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "FAIR-Checker answered with HTTP 503");
    }

    #[test]
    fn test_every_severity_maps_to_failure_exit() {
        let errors = [
            FairError::ConfigError {
                message: "bad".to_string(),
            },
            FairError::UpstreamStatusError {
                service: "ORKG API".to_string(),
                status: 500,
            },
            FairError::SerializationError(serde_json::from_str::<u8>("x").unwrap_err()),
            FairError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{} exits with success", err);
        }
    }
}
