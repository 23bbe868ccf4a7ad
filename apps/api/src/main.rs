mod analysis;
mod catalog;
mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::matching::TokenSetScorer;
use crate::catalog::{load_job_catalog, load_skill_catalog};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_env_filter(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillScan API v{}", env!("CARGO_PKG_VERSION"));

    // Load catalogs: built-in defaults, or JSON files named by env
    let skill_catalog = Arc::new(load_skill_catalog(config.skill_catalog_path.as_deref())?);
    let job_catalog = Arc::new(load_job_catalog(config.job_catalog_path.as_deref())?);
    info!(
        "Catalogs loaded: {} skill labels, {} job postings",
        skill_catalog.len(),
        job_catalog.len()
    );

    let state = AppState {
        config: config.clone(),
        skill_catalog,
        job_catalog,
        scorer: Arc::new(TokenSetScorer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Filter applied when RUST_LOG is unset. Keyed on `module_path!()`, the
/// crate's actual tracing target — the package name differs from the bin
/// crate name, so `CARGO_PKG_NAME` would silence our own log lines.
fn default_env_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{}={level}", module_path!()))
}
