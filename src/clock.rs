//! Injectable current-time source
//!
//! The transaction store stamps `created_at`/`updated_at` itself rather than
//! trusting caller input. Taking the clock as a trait keeps those stamps (and
//! month-bucket boundaries in tests) deterministic.

use chrono::{DateTime, Utc};

/// Source of the current instant
pub trait Clock {
    /// The current time in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns a fixed instant
///
/// Useful for deterministic timestamp assertions in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
