//! Fallback Provider

use rule_catalog::{Recommendation, TechStack};
use tracing::debug;

/// Confidence carried by the fallback
pub const FALLBACK_CONFIDENCE: f64 = 0.0;

/// Rationale carried by the fallback
pub const FALLBACK_REASON: &str =
    "No specific stack matched the given requirements; this is a solid general-purpose default.";

const FRONTEND: &str = "react";
const BACKEND: &str = "nodejs_express";
const DATABASE: &str = "postgresql";

/// The general-purpose default stack
pub fn recommendation() -> Recommendation {
    debug!("Using fallback recommendation");
    Recommendation::new(
        TechStack::new(FRONTEND, BACKEND, DATABASE),
        FALLBACK_CONFIDENCE,
        FALLBACK_REASON,
    )
}

/// Whether a recommendation is the fallback
pub fn is_fallback(recommendation: &Recommendation) -> bool {
    recommendation.rule_id().is_none()
        && recommendation.confidence() == FALLBACK_CONFIDENCE
        && recommendation.reason() == FALLBACK_REASON
        && recommendation.frontend() == FRONTEND
        && recommendation.backend() == BACKEND
        && recommendation.database() == DATABASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_stack() {
        let rec = recommendation();
        assert_eq!(rec.frontend(), "react");
        assert_eq!(rec.backend(), "nodejs_express");
        assert_eq!(rec.database(), "postgresql");
        assert_eq!(rec.confidence(), 0.0);
        assert!(rec.rule_id().is_none());
    }

    #[test]
    fn test_fallback_is_constant() {
        assert_eq!(recommendation(), recommendation());
        assert!(is_fallback(&recommendation()));
    }

    #[test]
    fn test_rule_output_is_not_fallback() {
        let rec = Recommendation::new(TechStack::new("react", "nodejs_express", "postgresql"), 0.5, "x");
        assert!(!is_fallback(&rec));
    }

    #[test]
    fn test_fallback_serializes_like_any_recommendation() {
        let json = serde_json::to_value(recommendation()).unwrap();
        assert_eq!(json["confidence"], 0.0);
        assert_eq!(json["frontend"], "react");
    }
}
