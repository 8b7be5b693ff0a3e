//! Implied-Fact Expansion
//!
//! Derives secondary requirement facts from primary ones using a fixed
//! derivation table. Expansion is single-level: implied facts never trigger
//! further implications.

mod expander;
mod table;

pub use expander::{expand, expand_with};
pub use table::{ImplicationRule, IMPLICATIONS};
