//! Derivation Table

use requirements::{RequirementKey, RequirementValue};
use serde::Serialize;

use RequirementKey as K;
use RequirementValue as V;

/// A single (trigger) → (implied) derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImplicationRule {
    /// Fact that must be present
    pub trigger: (RequirementKey, RequirementValue),
    /// Fact added when the trigger is present
    pub implied: (RequirementKey, RequirementValue),
}

impl ImplicationRule {
    pub const fn new(trigger: (K, V), implied: (K, V)) -> Self {
        Self { trigger, implied }
    }
}

/// Derivations applied to every requirement set before inference
pub const IMPLICATIONS: &[ImplicationRule] = &[
    ImplicationRule::new((K::ProjectType, V::Ecommerce), (K::PaymentIntegration, V::Yes)),
    ImplicationRule::new((K::ProjectType, V::Analytics), (K::DataProcessing, V::Heavy)),
    ImplicationRule::new((K::ProjectType, V::Analytics), (K::Visualization, V::Important)),
    ImplicationRule::new((K::ProjectType, V::Social), (K::UserGeneratedContent, V::Yes)),
    ImplicationRule::new((K::TeamExperience, V::Beginner), (K::LearningCurve, V::Low)),
    ImplicationRule::new((K::Infrastructure, V::Serverless), (K::Maintenance, V::Low)),
];
