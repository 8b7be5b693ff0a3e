//! Advisor Facade

use crate::engine::infer;
use crate::ranker::rank;
use crate::report::Report;
use crate::InferenceError;
use implication::expand;
use requirements::RequirementSet;
use rule_catalog::{CatalogHandle, Recommendation, RuleCatalog};
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point tying validation, expansion, inference and ranking together.
///
/// Holds no per-request state; any number of evaluations may run at once.
#[derive(Debug, Clone)]
pub struct Advisor {
    catalog: Arc<CatalogHandle>,
}

impl Advisor {
    /// Create an advisor over a freshly loaded catalog
    pub fn new(catalog: RuleCatalog) -> Self {
        info!("Creating advisor with {} rules", catalog.len());
        Self::with_handle(Arc::new(CatalogHandle::new(catalog)))
    }

    /// Create an advisor sharing an existing catalog handle
    pub fn with_handle(catalog: Arc<CatalogHandle>) -> Self {
        Self { catalog }
    }

    /// Catalog handle, for inspection and reload
    pub fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    /// Rank recommendations for a validated requirement set
    pub fn evaluate(
        &self,
        requirements: &RequirementSet,
    ) -> Result<Vec<Recommendation>, InferenceError> {
        self.evaluate_expanded(&expand(requirements))
    }

    /// Validate raw key/value pairs, evaluate them and build a report
    pub fn advise<I, K, V>(&self, pairs: I) -> Result<Report, InferenceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let requirements = RequirementSet::from_pairs(pairs)?;
        let expanded = expand(&requirements);
        let ranked = self.evaluate_expanded(&expanded)?;
        Ok(Report::new(&expanded, ranked))
    }

    fn evaluate_expanded(
        &self,
        expanded: &RequirementSet,
    ) -> Result<Vec<Recommendation>, InferenceError> {
        let start = std::time::Instant::now();
        let catalog = self.catalog.snapshot();

        let ranked = rank(infer(expanded, &catalog))?;

        debug!(
            "Evaluation completed in {}us ({} recommendations)",
            start.elapsed().as_micros(),
            ranked.len()
        );
        Ok(ranked)
    }
}
