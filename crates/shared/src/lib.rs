//! Shared configuration, errors, and typed ids for Finpulse.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AggregatorConfig, AggregatorMode, AnalysisConfig, AppConfig};
pub use error::{AppError, AppResult};
