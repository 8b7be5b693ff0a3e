//! Recommendation Rules

use crate::recommendation::TechStack;
use crate::CatalogLoadError;
use requirements::{RequirementKey, RequirementSet, RequirementValue};
use serde::Serialize;

/// Required fact: `key` must be present with exactly `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    pub key: RequirementKey,
    pub value: RequirementValue,
}

impl Condition {
    pub fn new(key: RequirementKey, value: RequirementValue) -> Self {
        Self { key, value }
    }

    /// Parse a raw condition for `rule`, rejecting anything no valid
    /// requirement set could satisfy
    pub fn parse(rule: &str, key: &str, value: &str) -> Result<Self, CatalogLoadError> {
        let parsed_key: RequirementKey =
            key.parse().map_err(|_| CatalogLoadError::UnknownConditionKey {
                rule: rule.to_string(),
                key: key.to_string(),
            })?;

        let parsed_value = value
            .parse::<RequirementValue>()
            .ok()
            .filter(|v| parsed_key.allows(*v))
            .ok_or_else(|| CatalogLoadError::IllegalConditionValue {
                rule: rule.to_string(),
                key: parsed_key,
                value: value.to_string(),
            })?;

        Ok(Self::new(parsed_key, parsed_value))
    }

    /// Whether the fact is present in `requirements`
    pub fn is_met_by(&self, requirements: &RequirementSet) -> bool {
        requirements.contains(self.key, self.value)
    }
}

/// Catalog entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRule {
    id: String,
    conditions: Vec<Condition>,
    stack: TechStack,
    confidence: f64,
    reason: String,
}

impl RecommendationRule {
    /// Create a validated rule
    pub fn new(
        id: impl Into<String>,
        conditions: Vec<Condition>,
        stack: TechStack,
        confidence: f64,
        reason: impl Into<String>,
    ) -> Result<Self, CatalogLoadError> {
        let id = id.into();

        if !(0.0..=1.0).contains(&confidence) {
            return Err(CatalogLoadError::ConfidenceOutOfRange {
                rule: id,
                confidence,
            });
        }
        // -0.0 passes the range check; store it as 0.0
        let confidence = confidence + 0.0;

        for (layer, tech) in [
            ("frontend", &stack.frontend),
            ("backend", &stack.backend),
            ("database", &stack.database),
        ] {
            if tech.trim().is_empty() {
                return Err(CatalogLoadError::MissingTechnology { rule: id, layer });
            }
        }

        for (i, condition) in conditions.iter().enumerate() {
            if conditions[..i].iter().any(|c| c.key == condition.key) {
                return Err(CatalogLoadError::ConflictingCondition {
                    rule: id,
                    key: condition.key,
                });
            }
        }

        Ok(Self {
            id,
            conditions,
            stack,
            confidence,
            reason: reason.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Required conditions, in definition order
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn stack(&self) -> &TechStack {
        &self.stack
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
