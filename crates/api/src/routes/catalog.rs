//! Catalog Routes

use axum::{extract::State, Json};
use rule_catalog::RecommendationRule;
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

/// Response for the catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub revision: u64,
    pub count: usize,
    pub rules: Vec<RecommendationRule>,
}

/// Response for a successful reload
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub revision: u64,
    pub count: usize,
}

/// List active rules in catalog order
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    let (revision, catalog) = state.advisor.catalog().snapshot_with_revision();

    Json(CatalogResponse {
        revision,
        count: catalog.len(),
        rules: catalog.rules().to_vec(),
    })
}

/// Reload the catalog from its configured path.
///
/// A rejected reload leaves the active catalog in place.
pub async fn reload_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let task_state = Arc::clone(&state);
    let result = tokio::task::spawn_blocking(move || {
        task_state
            .advisor
            .catalog()
            .reload_from(&task_state.catalog_path)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    match result {
        Ok(revision) => {
            metrics::counter!("advisor_catalog_reloads_total", "result" => "ok").increment(1);
            Ok(Json(ReloadResponse {
                revision,
                count: state.advisor.catalog().snapshot().len(),
            }))
        }
        Err(e) => {
            metrics::counter!("advisor_catalog_reloads_total", "result" => "rejected").increment(1);
            Err(e.into())
        }
    }
}
