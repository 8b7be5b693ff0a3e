//! Validation Error Types

use crate::key::RequirementKey;
use thiserror::Error;

/// Errors raised while building a requirement set from raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Key is not part of the requirement vocabulary
    #[error("unrecognized requirement key `{key}`")]
    UnknownKey { key: String },

    /// Value is not legal for its key
    #[error("illegal value `{value}` for requirement `{key}` (expected one of: {allowed})")]
    IllegalValue {
        key: RequirementKey,
        value: String,
        allowed: String,
    },

    /// Same key supplied more than once
    #[error("requirement `{0}` supplied more than once")]
    DuplicateKey(RequirementKey),
}

impl ValidationError {
    /// Name of the offending key, as supplied by the caller
    pub fn key(&self) -> &str {
        match self {
            ValidationError::UnknownKey { key } => key,
            ValidationError::IllegalValue { key, .. } => key.as_str(),
            ValidationError::DuplicateKey(key) => key.as_str(),
        }
    }
}
