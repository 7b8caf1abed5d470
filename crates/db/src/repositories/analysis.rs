//! Financial analysis repository.
//!
//! Stores one row per classification run of a linked item.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;
use uuid::Uuid;

use finpulse_core::analysis::Summary;
use finpulse_shared::types::AnalysisId;

use crate::entities::financial_analyses;

/// Upper bound for list queries.
pub const MAX_LIST_LIMIT: u64 = 100;

/// Error types for analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Item id is blank.
    #[error("Item id must not be empty")]
    EmptyItemId,

    /// Analysis not found.
    #[error("Analysis not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for storing an analysis.
#[derive(Debug, Clone)]
pub struct CreateAnalysisInput {
    /// Linked item the transactions came from.
    pub item_id: String,
    /// Classification result.
    pub summary: Summary,
    /// Number of transactions that were classified.
    pub transaction_count: usize,
}

/// Financial analysis repository.
#[derive(Debug, Clone)]
pub struct AnalysisRepository {
    db: DatabaseConnection,
}

impl AnalysisRepository {
    /// Creates a new analysis repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a summary for an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item id is blank or the insert fails.
    pub async fn create(
        &self,
        input: CreateAnalysisInput,
    ) -> Result<financial_analyses::Model, AnalysisError> {
        let item_id = input.item_id.trim();
        if item_id.is_empty() {
            return Err(AnalysisError::EmptyItemId);
        }

        let summary = input.summary;
        let analysis = financial_analyses::ActiveModel {
            id: Set(AnalysisId::new().into_inner()),
            item_id: Set(item_id.to_string()),
            profile: Set(summary.profile.as_str().to_string()),
            total_income: Set(summary.total_income),
            total_expense: Set(summary.total_expense),
            savings: Set(summary.savings),
            savings_ratio: Set(summary.savings_ratio),
            transaction_count: Set(i32::try_from(input.transaction_count).unwrap_or(i32::MAX)),
            created_at: Set(chrono::Utc::now().into()),
        };

        let model = analysis.insert(&self.db).await?;
        debug!(analysis_id = %model.id, item_id = %model.item_id, "Stored analysis");

        Ok(model)
    }

    /// Finds an analysis by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no analysis has this id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<financial_analyses::Model, AnalysisError> {
        financial_analyses::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AnalysisError::NotFound(id))
    }

    /// Lists analyses of an item, newest first. `limit` is capped at [`MAX_LIST_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_by_item(
        &self,
        item_id: &str,
        limit: u64,
    ) -> Result<Vec<financial_analyses::Model>, AnalysisError> {
        let analyses = financial_analyses::Entity::find()
            .filter(financial_analyses::Column::ItemId.eq(item_id))
            .order_by_desc(financial_analyses::Column::CreatedAt)
            .order_by_desc(financial_analyses::Column::Id)
            .limit(limit.min(MAX_LIST_LIMIT))
            .all(&self.db)
            .await?;

        Ok(analyses)
    }

    /// Returns the most recent analysis of an item, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn latest_for_item(
        &self,
        item_id: &str,
    ) -> Result<Option<financial_analyses::Model>, AnalysisError> {
        Ok(self.list_by_item(item_id, 1).await?.into_iter().next())
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
