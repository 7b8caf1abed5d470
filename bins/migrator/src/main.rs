//! Database migration runner for Finpulse.
//!
//! Reads the connection string from `DATABASE_URL`.
//!
//! Usage:
//!   migrator up      - Run all pending migrations
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use sea_orm_migration::prelude::*;
use finpulse_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The migrator CLI sets up its own tracing
    cli::run_cli(Migrator).await;
}
