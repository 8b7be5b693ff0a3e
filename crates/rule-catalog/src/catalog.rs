//! Rule Catalog

use crate::loader;
use crate::rule::RecommendationRule;
use crate::CatalogLoadError;
use config::FileFormat;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Ordered, immutable collection of recommendation rules.
///
/// Order is significant: it breaks ties between equally confident
/// recommendations.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<RecommendationRule>,
}

impl RuleCatalog {
    /// Build a catalog from already-constructed rules
    pub fn from_rules(rules: Vec<RecommendationRule>) -> Result<Self, CatalogLoadError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.id()) {
                return Err(CatalogLoadError::DuplicateIdentifier(rule.id().to_string()));
            }
            if rule.conditions().is_empty() {
                warn!("Rule `{}` has no conditions and will always fire", rule.id());
            }
        }

        if rules.is_empty() {
            warn!("Rule catalog is empty; every evaluation will use the fallback");
        }

        Ok(Self { rules })
    }

    /// Load a catalog from a rule definition file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let catalog = Self::from_rules(loader::load_file(path)?)?;
        info!("Loaded {} rules from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load a catalog from in-memory rule definitions
    pub fn from_text(text: &str, format: FileFormat) -> Result<Self, CatalogLoadError> {
        Self::from_rules(loader::load_str(text, format)?)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &RecommendationRule> {
        self.rules.iter()
    }

    /// Look up a rule by identifier
    pub fn get(&self, id: &str) -> Option<&RecommendationRule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }
}
