//! Stack Advisor API Server
//!
//! HTTP adapter over the recommendation engine. Each request evaluates its
//! own requirement set against the shared read-only catalog.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use inference_engine::Advisor;
use metrics_exporter_prometheus::PrometheusHandle;
use rule_catalog::RuleCatalog;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
mod routes;
pub mod settings;

pub use error::{ApiError, ErrorBody};
pub use settings::{AdvisorSettings, LoggingSettings};

/// Application state shared across handlers
pub struct AppState {
    /// Recommendation engine
    pub advisor: Advisor,
    /// Where catalog reloads read from
    pub catalog_path: PathBuf,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Prometheus handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: RuleCatalog, catalog_path: PathBuf) -> Self {
        Self {
            advisor: Advisor::new(catalog),
            catalog_path,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub catalog: CatalogStatus,
}

/// Active catalog status
#[derive(Debug, Serialize)]
pub struct CatalogStatus {
    pub revision: u64,
    pub rule_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route(
            "/api/v1/recommendations",
            post(routes::recommendations::post_recommendations),
        )
        .route("/api/v1/catalog", get(routes::catalog::get_catalog))
        .route("/api/v1/catalog/reload", post(routes::catalog::reload_catalog))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (revision, catalog) = state.advisor.catalog().snapshot_with_revision();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        catalog: CatalogStatus {
            revision,
            rule_count: catalog.len(),
        },
    })
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> String {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Initialize logging
pub fn init_logging(
    settings: &LoggingSettings,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let parsed = settings.max_level();
    let builder = FmtSubscriber::builder()
        .with_max_level(parsed.unwrap_or(Level::INFO))
        .with_target(true);

    if settings.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    if parsed.is_none() {
        warn!("Unknown logging.level `{}`; using info", settings.level);
    }
    Ok(())
}

/// Run the server until it fails
pub async fn run_server(addr: &str, state: AppState) -> std::io::Result<()> {
    let app = create_router(Arc::new(state));

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
