pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::Settings;

pub use crate::core::checker::FairChecker;
pub use crate::core::parser::parse_resource_id;
pub use utils::error::{FairError, Result};
