//! Field-level input validation
//!
//! Validates caller input before it reaches the store, surfacing per-field
//! messages suitable for inline display next to form inputs. Validation
//! failures never reach persistence.

use crate::models::{NewTransaction, TransactionPatch};

/// Maximum allowed description length, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field: `amount`, `date`, or `description`
    pub field: &'static str,
    /// Human-readable message for inline display
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate input for creating a transaction
///
/// Checks every field and collects all failures, so a form can display every
/// problem at once rather than one per submission.
pub fn validate_new_transaction(input: &NewTransaction) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_amount(input.amount, &mut errors);
    check_date(&input.date, &mut errors);
    check_description(&input.description, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a partial update
///
/// The same rules as [`validate_new_transaction`], applied only to the fields
/// the patch actually sets.
pub fn validate_patch(patch: &TransactionPatch) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Some(amount) = patch.amount {
        check_amount(amount, &mut errors);
    }
    if let Some(ref date) = patch.date {
        check_date(date, &mut errors);
    }
    if let Some(ref description) = patch.description {
        check_description(description, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_amount(amount: f64, errors: &mut Vec<FieldError>) {
    if !amount.is_finite() || amount <= 0.0 {
        errors.push(FieldError::new("amount", "Amount must be greater than 0"));
    }
}

fn check_date(date: &str, errors: &mut Vec<FieldError>) {
    if date.is_empty() {
        errors.push(FieldError::new("date", "Date is required"));
    }
}

fn check_description(description: &str, errors: &mut Vec<FieldError>) {
    if description.is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    } else if description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(FieldError::new(
            "description",
            "Description must be less than 200 characters",
        ));
    }
}
