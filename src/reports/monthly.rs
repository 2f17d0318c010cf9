//! Monthly breakdown
//!
//! Per-month income/expense/net buckets over a fixed six-month window ending
//! at a reference date's month.

use chrono::{Datelike, NaiveDate};

use crate::models::Transaction;

/// Number of calendar months covered by the breakdown window
const WINDOW_MONTHS: u32 = 6;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One calendar-month grouping in the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    /// Display label, e.g. "Mar 2026"
    pub month_label: String,
    /// Sum of income amounts attributed to this month
    pub income: f64,
    /// Sum of expense amounts attributed to this month
    pub expenses: f64,
    /// `income - expenses`
    pub net: f64,
}

/// Derive the six-month breakdown from a transaction list snapshot
///
/// Produces exactly six buckets covering the five months before `reference`'s
/// month through `reference`'s month inclusive, oldest first. Months with no
/// matching transactions still emit an all-zero bucket.
///
/// A transaction's bucket is determined solely by its `date` field
/// (`created_at` is never consulted); records with an unparsable date match
/// no bucket.
pub fn monthly_breakdown(transactions: &[Transaction], reference: NaiveDate) -> Vec<MonthlyBucket> {
    // Pre-parse once; unparsable dates drop out of the window entirely
    let dated: Vec<(&Transaction, NaiveDate)> = transactions
        .iter()
        .filter_map(|t| t.parsed_date().map(|d| (t, d)))
        .collect();

    (0..WINDOW_MONTHS)
        .rev()
        .map(|back| {
            let (year, month) = months_before(reference.year(), reference.month(), back);

            let mut income = 0.0;
            let mut expenses = 0.0;
            for (txn, date) in &dated {
                if date.year() == year && date.month() == month {
                    if txn.is_income() {
                        income += txn.amount;
                    } else {
                        expenses += txn.amount;
                    }
                }
            }

            MonthlyBucket {
                month_label: format!("{} {}", MONTH_ABBREV[(month - 1) as usize], year),
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}

/// Step a (year, month) pair back by a number of calendar months
fn months_before(year: i32, month: u32, back: u32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) - back as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}
