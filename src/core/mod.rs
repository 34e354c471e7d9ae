pub mod checker;
pub mod evaluator;
pub mod http;
pub mod parser;
pub mod render;
pub mod resolver;
pub mod scoring;
pub mod session;

pub use crate::domain::model::{FairnessDisplay, MetricResult, ResolvedUris, ResourceId, UriKind};
pub use crate::domain::ports::{ConfigProvider, FairnessAssessor, ResourceLookup};
pub use crate::utils::error::Result;
