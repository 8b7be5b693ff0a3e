//! Stack Advisor - Main Entry Point

use anyhow::Context;
use api::{init_logging, run_server, AdvisorSettings, AppState};
use metrics_exporter_prometheus::PrometheusBuilder;
use rule_catalog::RuleCatalog;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AdvisorSettings::load().context("Failed to load settings")?;
    init_logging(&settings.logging).context("Failed to set tracing subscriber")?;

    info!("=== Stack Advisor v{} ===", env!("CARGO_PKG_VERSION"));

    // A bad catalog is fatal: never serve with a partial rule set
    let catalog = RuleCatalog::load(&settings.catalog.path).with_context(|| {
        format!(
            "Failed to load rule catalog from {}",
            settings.catalog.path.display()
        )
    })?;

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install metrics recorder")?;

    let state = AppState::new(catalog, settings.catalog.path.clone()).with_metrics(metrics);
    run_server(&settings.server.bind_addr, state).await?;

    Ok(())
}
