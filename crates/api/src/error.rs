//! API Error Mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inference_engine::InferenceError;
use rule_catalog::CatalogLoadError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    CatalogLoad(#[from] CatalogLoadError),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, key) = match &self {
            ApiError::Inference(InferenceError::Validation(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                Some(e.key().to_string()),
            ),
            ApiError::Inference(InferenceError::InvariantViolation(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_invariant_violation",
                None,
            ),
            ApiError::CatalogLoad(_) => (StatusCode::CONFLICT, "catalog_load_error", None),
            ApiError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "malformed_body", None),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None),
        };

        if status.is_server_error() {
            error!("{}: {}", code, self);
        } else {
            warn!("{}: {}", code, self);
        }

        let body = ErrorBody {
            error: code,
            message: self.to_string(),
            key,
        };
        (status, Json(body)).into_response()
    }
}
