//! Requirement Values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every value token the vocabulary knows about.
///
/// Which tokens are legal depends on the key; see
/// [`RequirementKey::allowed_values`](crate::RequirementKey::allowed_values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementValue {
    // Project types
    Ecommerce,
    Cms,
    Social,
    Analytics,
    Gaming,
    General,
    // Flags
    Yes,
    No,
    Important,
    // Magnitudes
    Low,
    Small,
    Medium,
    Large,
    High,
    Heavy,
    // Timelines
    Fast,
    Moderate,
    Long,
    // Languages
    Javascript,
    Python,
    Java,
    Beginner,
    // Data shapes
    Flexible,
    Structured,
    Mixed,
    // Infrastructure
    Serverless,
}

impl RequirementValue {
    /// All value tokens
    pub const ALL: [RequirementValue; 26] = [
        RequirementValue::Ecommerce,
        RequirementValue::Cms,
        RequirementValue::Social,
        RequirementValue::Analytics,
        RequirementValue::Gaming,
        RequirementValue::General,
        RequirementValue::Yes,
        RequirementValue::No,
        RequirementValue::Important,
        RequirementValue::Low,
        RequirementValue::Small,
        RequirementValue::Medium,
        RequirementValue::Large,
        RequirementValue::High,
        RequirementValue::Heavy,
        RequirementValue::Fast,
        RequirementValue::Moderate,
        RequirementValue::Long,
        RequirementValue::Javascript,
        RequirementValue::Python,
        RequirementValue::Java,
        RequirementValue::Beginner,
        RequirementValue::Flexible,
        RequirementValue::Structured,
        RequirementValue::Mixed,
        RequirementValue::Serverless,
    ];

    /// Get wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementValue::Ecommerce => "ecommerce",
            RequirementValue::Cms => "cms",
            RequirementValue::Social => "social",
            RequirementValue::Analytics => "analytics",
            RequirementValue::Gaming => "gaming",
            RequirementValue::General => "general",
            RequirementValue::Yes => "yes",
            RequirementValue::No => "no",
            RequirementValue::Important => "important",
            RequirementValue::Low => "low",
            RequirementValue::Small => "small",
            RequirementValue::Medium => "medium",
            RequirementValue::Large => "large",
            RequirementValue::High => "high",
            RequirementValue::Heavy => "heavy",
            RequirementValue::Fast => "fast",
            RequirementValue::Moderate => "moderate",
            RequirementValue::Long => "long",
            RequirementValue::Javascript => "javascript",
            RequirementValue::Python => "python",
            RequirementValue::Java => "java",
            RequirementValue::Beginner => "beginner",
            RequirementValue::Flexible => "flexible",
            RequirementValue::Structured => "structured",
            RequirementValue::Mixed => "mixed",
            RequirementValue::Serverless => "serverless",
        }
    }
}

impl fmt::Display for RequirementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementValue {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequirementValue::ALL
            .iter()
            .copied()
            .find(|value| value.as_str() == s)
            .ok_or(())
    }
}
