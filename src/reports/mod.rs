//! Aggregation engine for fintrack
//!
//! Pure, side-effect-free derivations over a transaction list snapshot:
//! summary statistics and the six-month breakdown. Nothing here mutates or
//! persists; callers recompute whenever the list changes.

pub mod monthly;
pub mod summary;

pub use monthly::{monthly_breakdown, MonthlyBucket};
pub use summary::{summarize, Summary};
