//! Evaluation Report

use requirements::RequirementSet;
use rule_catalog::Recommendation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Expanded requirement facts in wire form
    pub requirements: BTreeMap<String, String>,
    /// Highest-ranked recommendation
    pub best_match: Recommendation,
    /// Full ranked list
    pub all_recommendations: Vec<Recommendation>,
}

impl Report {
    /// Assemble a report from expanded facts and a ranked list
    pub(crate) fn new(requirements: &RequirementSet, mut ranked: Vec<Recommendation>) -> Self {
        if ranked.is_empty() {
            ranked.push(fallback::recommendation());
        }
        let best_match = ranked[0].clone();

        Self {
            requirements: requirements.to_string_map(),
            best_match,
            all_recommendations: ranked,
        }
    }

    /// Whether no rule matched
    pub fn is_fallback(&self) -> bool {
        fallback::is_fallback(&self.best_match)
    }

    /// Downloadable JSON form
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
