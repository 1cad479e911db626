// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::fixture_repository::FixtureRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_config()?;
    let initial = DashboardService::parse_range(&config.range.from, &config.range.to)
        .context("invalid initial range in configuration")?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FixtureRepository::new());

    // Create services (application layer)
    let dashboard_service =
        DashboardService::new(repository, config.baseline.into(), initial.range);
    let streaming_service = StreamingDashboardService::new(dashboard_service.clone());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {:?}", config.server.bind))?;
    tracing::info!(
        "Starting alerts-dashboard on {} (initial range {}..{})",
        addr,
        initial.range.from,
        initial.range.to
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
