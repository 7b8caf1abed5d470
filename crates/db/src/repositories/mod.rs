//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod analysis;

pub use analysis::{AnalysisError, AnalysisRepository, CreateAnalysisInput, MAX_LIST_LIMIT};
