//! `SeaORM` entities.

pub mod financial_analyses;
