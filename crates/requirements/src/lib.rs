//! Requirement Vocabulary and Validation
//!
//! Provides the closed set of requirement keys and values, and the validated,
//! immutable requirement set built once per evaluation.

mod error;
mod key;
mod set;
mod value;

pub use error::ValidationError;
pub use key::RequirementKey;
pub use set::RequirementSet;
pub use value::RequirementValue;
