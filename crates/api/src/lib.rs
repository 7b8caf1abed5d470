//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - JSON error responses
//! - Shared application state

pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use finpulse_aggregator::AggregatorClient;
use finpulse_shared::AnalysisConfig;

pub use error::ApiError;

/// Upper bound on handling one request, aggregator round trips included.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Open-banking aggregator client.
    pub aggregator: Arc<dyn AggregatorClient>,
    /// Analysis settings.
    pub analysis: AnalysisConfig,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
