//! Financial analysis routes.
//!
//! `POST /analyses` runs the whole pipeline for one linked item: fetch the
//! recent transactions, classify them, store the summary and return it.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use finpulse_aggregator::DateRange;
use finpulse_core::analysis::ClassificationEngine;
use finpulse_db::{
    AnalysisRepository, CreateAnalysisInput, entities::financial_analyses,
    repositories::analysis::MAX_LIST_LIMIT,
};
use finpulse_shared::{AppError, types::AnalysisId};

use crate::{AppState, error::ApiError};

/// Page size used when `limit` is not given.
const DEFAULT_LIST_LIMIT: u64 = 20;

/// Creates the analysis routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analyses", post(create_analysis))
        .route("/analyses/{id}", get(get_analysis))
        .route("/items/{item_id}/analyses", get(list_item_analyses))
        .route("/items/{item_id}/analyses/latest", get(latest_item_analysis))
}

/// Request body for running an analysis.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisRequest {
    /// Linked item to analyse.
    #[serde(default)]
    pub item_id: String,
}

/// Query parameters for listing analyses.
#[derive(Debug, Deserialize)]
pub struct ListAnalysesQuery {
    /// Maximum number of records, capped at 100.
    pub limit: Option<u64>,
}

/// A stored analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Analysis id.
    pub id: AnalysisId,
    /// Linked item the transactions came from.
    pub item_id: String,
    /// Profile label.
    pub profile: String,
    /// Sum of credits.
    pub total_income: Decimal,
    /// Sum of absolute debits.
    pub total_expense: Decimal,
    /// Income minus expense.
    pub savings: Decimal,
    /// Savings over income.
    pub savings_ratio: Decimal,
    /// Number of transactions classified.
    pub transaction_count: i32,
    /// When the analysis was stored.
    pub created_at: DateTime<FixedOffset>,
}

impl From<financial_analyses::Model> for AnalysisResponse {
    fn from(model: financial_analyses::Model) -> Self {
        Self {
            id: AnalysisId::from_uuid(model.id),
            item_id: model.item_id,
            profile: model.profile,
            total_income: model.total_income,
            total_expense: model.total_expense,
            savings: model.savings,
            savings_ratio: model.savings_ratio,
            transaction_count: model.transaction_count,
            created_at: model.created_at,
        }
    }
}

/// Response for listing analyses of an item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisListResponse {
    /// Linked item.
    pub item_id: String,
    /// Analyses, newest first.
    pub analyses: Vec<AnalysisResponse>,
}

/// POST `/analyses` - Fetch, classify and store the transactions of an item.
async fn create_analysis(
    State(state): State<AppState>,
    Json(request): Json<CreateAnalysisRequest>,
) -> Result<(StatusCode, Json<AnalysisResponse>), ApiError> {
    let item_id = request.item_id.trim();
    if item_id.is_empty() {
        return Err(AppError::Validation("itemId is required".to_string()).into());
    }

    let range = DateRange::last_days(Utc::now().date_naive(), state.analysis.lookback_days);
    let transactions = state
        .aggregator
        .fetch_transactions(item_id, range)
        .await
        .map_err(|e| {
            error!(error = %e, item_id = %item_id, "Failed to fetch transactions");
            ApiError::fetch(e)
        })?;

    let summary = ClassificationEngine::classify(&transactions);

    let repo = AnalysisRepository::new((*state.db).clone());
    let model = repo
        .create(CreateAnalysisInput {
            item_id: item_id.to_string(),
            summary,
            transaction_count: transactions.len(),
        })
        .await
        .map_err(|e| {
            error!(error = %e, item_id = %item_id, "Failed to store analysis");
            ApiError::from(e)
        })?;

    info!(
        analysis_id = %model.id,
        item_id = %item_id,
        profile = %summary.profile,
        transactions = transactions.len(),
        "Analysis completed"
    );

    Ok((StatusCode::CREATED, Json(model.into())))
}

/// GET `/analyses/{id}` - Get a stored analysis.
async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<AnalysisId>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let repo = AnalysisRepository::new((*state.db).clone());
    let model = repo.find_by_id(id.into_inner()).await?;

    Ok(Json(model.into()))
}

/// GET `/items/{item_id}/analyses` - List analyses of an item, newest first.
async fn list_item_analyses(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Query(query): Query<ListAnalysesQuery>,
) -> Result<Json<AnalysisListResponse>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let repo = AnalysisRepository::new((*state.db).clone());
    let analyses = repo.list_by_item(&item_id, limit).await.map_err(|e| {
        error!(error = %e, item_id = %item_id, "Failed to list analyses");
        ApiError::from(e)
    })?;

    Ok(Json(AnalysisListResponse {
        item_id,
        analyses: analyses.into_iter().map(AnalysisResponse::from).collect(),
    }))
}

/// GET `/items/{item_id}/analyses/latest` - Get the most recent analysis of an item.
async fn latest_item_analysis(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let repo = AnalysisRepository::new((*state.db).clone());
    let model = repo
        .latest_for_item(&item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No analysis for item {item_id}")))?;

    Ok(Json(model.into()))
}
