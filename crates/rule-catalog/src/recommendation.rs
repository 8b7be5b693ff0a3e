//! Recommendation Output Record

use crate::rule::RecommendationRule;
use serde::{Deserialize, Serialize};

/// Candidate technology stack. Identifiers are opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TechStack {
    pub frontend: String,
    pub backend: String,
    pub database: String,
}

impl TechStack {
    pub fn new(
        frontend: impl Into<String>,
        backend: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            frontend: frontend.into(),
            backend: backend.into(),
            database: database.into(),
        }
    }
}

/// Recommended stack with its confidence and rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    stack: TechStack,
    /// Confidence score (0.0 to 1.0)
    confidence: f64,
    reason: String,
    /// Identifier of the rule that produced this, if any
    #[serde(skip)]
    rule_id: Option<String>,
}

impl Recommendation {
    /// Create a recommendation not backed by a catalog rule
    pub fn new(stack: TechStack, confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            stack,
            confidence,
            reason: reason.into(),
            rule_id: None,
        }
    }

    /// Create the recommendation a fired rule yields
    pub fn from_rule(rule: &RecommendationRule) -> Self {
        Self {
            stack: rule.stack().clone(),
            confidence: rule.confidence(),
            reason: rule.reason().to_string(),
            rule_id: Some(rule.id().to_string()),
        }
    }

    pub fn stack(&self) -> &TechStack {
        &self.stack
    }

    pub fn frontend(&self) -> &str {
        &self.stack.frontend
    }

    pub fn backend(&self) -> &str {
        &self.stack.backend
    }

    pub fn database(&self) -> &str {
        &self.stack.database
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }
}
