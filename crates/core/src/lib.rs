//! Core business logic for Finpulse.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `analysis` - Income/expense summary and profile classification
pub mod analysis;
