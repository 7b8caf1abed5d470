//! Income/expense analysis of a linked account.
//!
//! A single pass over the account's transactions produces a [`Summary`]
//! with totals, savings ratio and a [`Profile`] label.

pub mod engine;
pub mod types;

#[cfg(test)]
mod props;
#[cfg(test)]
mod tests;

pub use engine::{ClassificationEngine, INVESTOR_THRESHOLD, SAVER_THRESHOLD};
pub use types::{Profile, Summary, Transaction, UnknownProfile};
