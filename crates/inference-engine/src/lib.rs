//! Stack Recommendation Inference Engine
//!
//! Evaluates every catalog rule against an expanded requirement set, ranks
//! the fired rules by confidence and falls back to a default stack when
//! nothing fires. All evaluation functions are pure; the only shared state
//! is the read-only catalog snapshot.

mod advisor;
mod engine;
mod ranker;
mod report;

pub use advisor::Advisor;
pub use engine::{fires, infer};
pub use ranker::rank;
pub use report::Report;

use requirements::ValidationError;
use thiserror::Error;

/// Errors during evaluation
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Bad caller input
    #[error("Invalid requirements: {0}")]
    Validation(#[from] ValidationError),
    /// Bad rule data or an engine bug
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(#[from] InvariantViolation),
}

/// Post-condition failures observed while ranking
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("recommendation from `{rule_id}` has confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { rule_id: String, confidence: f64 },
    #[error("ranked output is not sorted by confidence at position {position}")]
    UnsortedOutput { position: usize },
}
