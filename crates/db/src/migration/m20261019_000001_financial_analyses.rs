//! Migration to create the `financial_analyses` table.

use sea_orm::sea_query::TableCreateStatement;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(financial_analyses_table()).await?;

        // History of one item, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_financial_analyses_item_created")
                    .table(FinancialAnalyses::Table)
                    .col(FinancialAnalyses::ItemId)
                    .col(FinancialAnalyses::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FinancialAnalyses::Table).to_owned())
            .await
    }
}

/// Money and ratio columns are unconstrained `numeric` so summaries are stored
/// exactly as computed.
fn financial_analyses_table() -> TableCreateStatement {
    Table::create()
        .table(FinancialAnalyses::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(FinancialAnalyses::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(FinancialAnalyses::ItemId)
                .string_len(128)
                .not_null(),
        )
        .col(
            ColumnDef::new(FinancialAnalyses::Profile)
                .string_len(16)
                .not_null(),
        )
        .col(ColumnDef::new(FinancialAnalyses::TotalIncome).decimal().not_null())
        .col(ColumnDef::new(FinancialAnalyses::TotalExpense).decimal().not_null())
        .col(ColumnDef::new(FinancialAnalyses::Savings).decimal().not_null())
        .col(ColumnDef::new(FinancialAnalyses::SavingsRatio).decimal().not_null())
        .col(
            ColumnDef::new(FinancialAnalyses::TransactionCount)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(FinancialAnalyses::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum FinancialAnalyses {
    Table,
    Id,
    ItemId,
    Profile,
    TotalIncome,
    TotalExpense,
    Savings,
    SavingsRatio,
    TransactionCount,
    CreatedAt,
}
