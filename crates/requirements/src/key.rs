//! Requirement Keys

use crate::value::RequirementValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use RequirementValue as V;

/// Requirement identifier. The set is closed; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKey {
    /// Kind of product being built
    ProjectType,
    /// Search engine visibility matters
    SeoImportant,
    /// Live updates, chat, push
    Realtime,
    TeamSize,
    /// Time to first release
    Timeline,
    /// Monthly infrastructure budget
    Budget,
    /// Team's primary language
    TeamExperience,
    Scalability,
    /// Shape of the stored data
    DataStructure,
    TypeSafety,
    ApiHeavy,
    MobileApp,
    CrossPlatform,
    /// Hosting preference
    Infrastructure,
    /// Operational upkeep the team can afford
    Maintenance,
    PaymentIntegration,
    /// Data processing intensity
    DataProcessing,
    Visualization,
    UserGeneratedContent,
    /// Tolerable learning curve
    LearningCurve,
}

impl RequirementKey {
    /// All keys, in vocabulary order
    pub const ALL: [RequirementKey; 20] = [
        RequirementKey::ProjectType,
        RequirementKey::SeoImportant,
        RequirementKey::Realtime,
        RequirementKey::TeamSize,
        RequirementKey::Timeline,
        RequirementKey::Budget,
        RequirementKey::TeamExperience,
        RequirementKey::Scalability,
        RequirementKey::DataStructure,
        RequirementKey::TypeSafety,
        RequirementKey::ApiHeavy,
        RequirementKey::MobileApp,
        RequirementKey::CrossPlatform,
        RequirementKey::Infrastructure,
        RequirementKey::Maintenance,
        RequirementKey::PaymentIntegration,
        RequirementKey::DataProcessing,
        RequirementKey::Visualization,
        RequirementKey::UserGeneratedContent,
        RequirementKey::LearningCurve,
    ];

    /// Get wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementKey::ProjectType => "project_type",
            RequirementKey::SeoImportant => "seo_important",
            RequirementKey::Realtime => "realtime",
            RequirementKey::TeamSize => "team_size",
            RequirementKey::Timeline => "timeline",
            RequirementKey::Budget => "budget",
            RequirementKey::TeamExperience => "team_experience",
            RequirementKey::Scalability => "scalability",
            RequirementKey::DataStructure => "data_structure",
            RequirementKey::TypeSafety => "type_safety",
            RequirementKey::ApiHeavy => "api_heavy",
            RequirementKey::MobileApp => "mobile_app",
            RequirementKey::CrossPlatform => "cross_platform",
            RequirementKey::Infrastructure => "infrastructure",
            RequirementKey::Maintenance => "maintenance",
            RequirementKey::PaymentIntegration => "payment_integration",
            RequirementKey::DataProcessing => "data_processing",
            RequirementKey::Visualization => "visualization",
            RequirementKey::UserGeneratedContent => "user_generated_content",
            RequirementKey::LearningCurve => "learning_curve",
        }
    }

    /// Values legal for this key
    pub fn allowed_values(&self) -> &'static [RequirementValue] {
        match self {
            RequirementKey::ProjectType => {
                &[V::Ecommerce, V::Cms, V::Social, V::Analytics, V::Gaming, V::General]
            }
            RequirementKey::SeoImportant
            | RequirementKey::Realtime
            | RequirementKey::ApiHeavy
            | RequirementKey::MobileApp
            | RequirementKey::CrossPlatform => &[V::Yes, V::No],
            RequirementKey::TeamSize => &[V::Small, V::Medium, V::Large],
            RequirementKey::Timeline => &[V::Fast, V::Moderate, V::Long],
            RequirementKey::Budget => &[V::Low, V::Medium, V::High],
            RequirementKey::TeamExperience => &[V::Javascript, V::Python, V::Java, V::Beginner],
            RequirementKey::Scalability => &[V::High, V::Medium, V::Low],
            RequirementKey::DataStructure => &[V::Flexible, V::Structured, V::Mixed],
            RequirementKey::TypeSafety | RequirementKey::Visualization => &[V::Important],
            RequirementKey::Infrastructure => &[V::Serverless],
            RequirementKey::Maintenance | RequirementKey::LearningCurve => &[V::Low],
            RequirementKey::PaymentIntegration | RequirementKey::UserGeneratedContent => &[V::Yes],
            RequirementKey::DataProcessing => &[V::Heavy],
        }
    }

    /// Check whether a value is legal for this key
    pub fn allows(&self, value: RequirementValue) -> bool {
        self.allowed_values().contains(&value)
    }

    /// Whether this key is normally produced by implication rather than asked for
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            RequirementKey::Maintenance
                | RequirementKey::PaymentIntegration
                | RequirementKey::DataProcessing
                | RequirementKey::Visualization
                | RequirementKey::UserGeneratedContent
                | RequirementKey::LearningCurve
        )
    }

    pub(crate) fn allowed_list(&self) -> String {
        self.allowed_values()
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequirementKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_values() {
        for key in RequirementKey::ALL {
            assert!(!key.allowed_values().is_empty(), "{} has no values", key);
        }
    }

    #[test]
    fn test_wire_names_round_trip() {
        for key in RequirementKey::ALL {
            assert_eq!(key.as_str().parse::<RequirementKey>(), Ok(key));
        }
        assert!("foo".parse::<RequirementKey>().is_err());
    }

    #[test]
    fn test_allowed_values() {
        assert!(RequirementKey::ProjectType.allows(V::Ecommerce));
        assert!(!RequirementKey::ProjectType.allows(V::Yes));
        assert!(RequirementKey::Scalability.allows(V::High));
        assert!(!RequirementKey::TeamSize.allows(V::High));
    }

    #[test]
    fn test_derived_keys() {
        assert!(RequirementKey::PaymentIntegration.is_derived());
        assert!(RequirementKey::LearningCurve.is_derived());
        assert!(!RequirementKey::ProjectType.is_derived());
    }
}
