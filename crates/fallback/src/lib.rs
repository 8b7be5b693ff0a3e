//! Fallback Recommendation
//!
//! Provides the constant default stack returned when no catalog rule fires.
//! "No rule matched" is a normal outcome for sparse input, not an error.

mod provider;

pub use provider::{is_fallback, recommendation, FALLBACK_CONFIDENCE, FALLBACK_REASON};
