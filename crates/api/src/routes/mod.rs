//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod analyses;
pub mod connect_token;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(connect_token::routes())
        .merge(analyses::routes())
}
