//! Summary statistics
//!
//! Totals, balance, and record count over a transaction list snapshot.

use crate::models::Transaction;

/// Aggregate statistics over a transaction list
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Sum of amounts over income transactions
    pub total_income: f64,
    /// Sum of amounts over expense transactions
    pub total_expenses: f64,
    /// `total_income - total_expenses`
    pub balance: f64,
    /// Total record count, both types
    pub count: usize,
}

/// Derive summary statistics from a transaction list snapshot
///
/// Pure and side-effect-free; never mutates, never persists. Empty input
/// yields an all-zero result. Sums use plain floating arithmetic; rounding,
/// if any, is a presentation concern.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();

    let total_expenses: f64 = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        count: transactions.len(),
    }
}
