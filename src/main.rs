//! Hero Auditor — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hero_auditor::api::{self, AppState};
use hero_auditor::config::{resolved_config_path, start_hot_reload_thread, ConfigHandle};
use hero_auditor::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments. This enables
    // DISCOVERY_CONFIG_PATH / DISCOVERY_HOT_RELOAD from .env.
    let _ = dotenvy::dotenv();

    init_tracing();

    // --- Discovery config + optional dev hot reload ---
    let config = ConfigHandle::load_default()?;
    start_hot_reload_thread(config.clone(), resolved_config_path());

    // Metrics recorder must be installed before the first pipeline run.
    let metrics = Metrics::init();

    let state = AppState::new(config);
    let app = api::router(state).merge(metrics.router());

    let addr = std::env::var("DISCOVERY_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "hero-auditor listening");
    axum::serve(listener, app).await?;

    Ok(())
}
