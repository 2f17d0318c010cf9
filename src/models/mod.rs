//! Core data models for fintrack
//!
//! The transaction is the sole entity: one recorded income or expense event
//! with an amount, date, and description.

pub mod ids;
pub mod transaction;

pub use ids::TransactionId;
pub use transaction::{NewTransaction, Transaction, TransactionPatch, TransactionType};
