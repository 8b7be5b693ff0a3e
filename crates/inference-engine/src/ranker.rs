//! Result Ranker

use crate::InvariantViolation;
use rule_catalog::Recommendation;
use std::cmp::Ordering;
use tracing::debug;

/// Order candidates by confidence, highest first.
///
/// The sort is stable, so equally confident candidates keep catalog order.
/// An empty input yields the fallback recommendation alone.
pub fn rank(mut candidates: Vec<Recommendation>) -> Result<Vec<Recommendation>, InvariantViolation> {
    for candidate in &candidates {
        if !(0.0..=1.0).contains(&candidate.confidence()) {
            return Err(InvariantViolation::ConfidenceOutOfRange {
                rule_id: candidate.rule_id().unwrap_or("<unknown>").to_string(),
                confidence: candidate.confidence(),
            });
        }
    }

    if candidates.is_empty() {
        debug!("No rule fired");
        return Ok(vec![fallback::recommendation()]);
    }

    // NaN is excluded above; -0.0 and 0.0 compare equal and keep catalog order
    candidates.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(Ordering::Equal)
    });

    if let Some(position) = candidates
        .windows(2)
        .position(|pair| pair[0].confidence() < pair[1].confidence())
    {
        return Err(InvariantViolation::UnsortedOutput {
            position: position + 1,
        });
    }

    debug!(
        "Ranked {} candidates, best={:?}",
        candidates.len(),
        candidates[0].rule_id()
    );
    Ok(candidates)
}
