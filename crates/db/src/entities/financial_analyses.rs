//! `SeaORM` Entity for financial_analyses table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "financial_analyses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub item_id: String,
    pub profile: String,
    #[sea_orm(column_type = "Decimal(None)")]
    pub total_income: Decimal,
    #[sea_orm(column_type = "Decimal(None)")]
    pub total_expense: Decimal,
    #[sea_orm(column_type = "Decimal(None)")]
    pub savings: Decimal,
    #[sea_orm(column_type = "Decimal(None)")]
    pub savings_ratio: Decimal,
    pub transaction_count: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
