//! fintrack - Local-first personal finance tracking core
//!
//! This library provides the data and aggregation core for a personal finance
//! tracker: users record income/expense transactions, and derived statistics
//! (totals, balance, six-month trend) are computed from the current list. All
//! state lives in a single local key-value entry; there is no server and no
//! multi-user concern. Presentation and form wiring are external collaborators
//! that call into this crate's API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the on-disk store
//! - `error`: Custom error types
//! - `models`: Core data model (transactions)
//! - `storage`: Key-value storage layer and the transaction store
//! - `reports`: Pure aggregation over transaction lists
//! - `validation`: Field-level input validation
//! - `clock`: Injectable current-time source
//!
//! # Example
//!
//! ```rust
//! use fintrack::models::{NewTransaction, TransactionType};
//! use fintrack::reports::summarize;
//! use fintrack::storage::{MemoryStore, TransactionStore};
//!
//! let store = TransactionStore::new(MemoryStore::new());
//! store.create(NewTransaction {
//!     amount: 120.50,
//!     date: "2026-03-14".into(),
//!     description: "Groceries".into(),
//!     kind: TransactionType::Expense,
//! });
//! let summary = summarize(&store.list());
//! assert_eq!(summary.total_expenses, 120.50);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod validation;

pub use error::FintrackError;
