//! Recommendation Rule Catalog
//!
//! Provides the rule data model, a validating loader for external rule
//! definitions, and a handle that publishes catalog replacements atomically.

mod catalog;
mod handle;
mod loader;
mod recommendation;
mod rule;

pub use catalog::RuleCatalog;
pub use config::FileFormat as CatalogFormat;
pub use handle::CatalogHandle;
pub use recommendation::{Recommendation, TechStack};
pub use rule::{Condition, RecommendationRule};

use requirements::RequirementKey;
use thiserror::Error;

/// Errors while loading or reloading a rule catalog
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read rule source: {0}")]
    Source(#[from] config::ConfigError),
    #[error("Rule #{index} has an empty identifier")]
    EmptyIdentifier { index: usize },
    #[error("Duplicate rule identifier `{0}`")]
    DuplicateIdentifier(String),
    #[error("Rule `{rule}` confidence {confidence} is outside [0, 1]")]
    ConfidenceOutOfRange { rule: String, confidence: f64 },
    #[error("Rule `{rule}` references unknown requirement key `{key}`")]
    UnknownConditionKey { rule: String, key: String },
    #[error("Rule `{rule}` expects illegal value `{value}` for `{key}`")]
    IllegalConditionValue {
        rule: String,
        key: RequirementKey,
        value: String,
    },
    #[error("Rule `{rule}` lists condition `{key}` more than once")]
    ConflictingCondition { rule: String, key: RequirementKey },
    #[error("Rule `{rule}` has no {layer} technology")]
    MissingTechnology { rule: String, layer: &'static str },
}
