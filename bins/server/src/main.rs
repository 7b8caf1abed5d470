//! Finpulse API Server
//!
//! Links bank accounts through the aggregator, classifies their recent
//! transactions and stores the results.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finpulse_aggregator::build_client;
use finpulse_api::{AppState, create_router};
use finpulse_db::connect;
use finpulse_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finpulse=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let aggregator =
        build_client(&config.aggregator).context("Failed to configure aggregator client")?;
    info!(
        mode = ?config.aggregator.mode,
        base_url = %config.aggregator.base_url,
        "Aggregator client configured"
    );

    let state = AppState {
        db: Arc::new(db),
        aggregator,
        analysis: config.analysis.clone(),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
