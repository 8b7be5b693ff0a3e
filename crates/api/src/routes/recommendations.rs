//! Recommendation Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use inference_engine::{InferenceError, Report};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

/// Evaluate a requirement map and return the ranked report.
///
/// Unanswered questions must be omitted rather than sent as null.
pub async fn post_recommendations(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BTreeMap<String, String>>, JsonRejection>,
) -> Result<Json<Report>, ApiError> {
    let Json(requirements) = body.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

    let report = match state.advisor.advise(&requirements) {
        Ok(report) => report,
        Err(e) => {
            if let InferenceError::Validation(_) = e {
                metrics::counter!("advisor_validation_errors_total").increment(1);
            }
            return Err(e.into());
        }
    };

    let outcome = if report.is_fallback() { "fallback" } else { "matched" };
    metrics::counter!("advisor_evaluations_total", "outcome" => outcome).increment(1);

    info!(
        "Recommended {} + {} + {} (conf={:.2}, {} candidates)",
        report.best_match.frontend(),
        report.best_match.backend(),
        report.best_match.database(),
        report.best_match.confidence(),
        report.all_recommendations.len()
    );

    Ok(Json(report))
}
