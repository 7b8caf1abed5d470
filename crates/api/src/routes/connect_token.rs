//! Connect token route for the account-linking widget.

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use tracing::error;

use finpulse_aggregator::ConnectToken;

use crate::{AppState, error::ApiError};

/// Creates the connect token routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/connect-token", post(create_connect_token))
}

/// Optional request body. An item id asks for an update-mode token.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectTokenRequest {
    /// Already linked item to reconnect.
    pub item_id: Option<String>,
}

/// POST `/connect-token` - Issue a token for the linking widget.
async fn create_connect_token(
    State(state): State<AppState>,
    body: Option<Json<ConnectTokenRequest>>,
) -> Result<Json<ConnectToken>, ApiError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let item_id = request
        .item_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let token = state
        .aggregator
        .create_connect_token(item_id)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create connect token");
            ApiError::token(&e)
        })?;

    Ok(Json(token))
}
