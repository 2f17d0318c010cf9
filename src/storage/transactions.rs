//! Transaction store
//!
//! Single source of truth for the transaction collection, backed by one entry
//! in an injected key-value store. Every mutation is a read-modify-write of
//! the entire collection as one serialized unit; there is no partial
//! persistence and no transaction log.
//!
//! The API is infallible by policy: a missing, corrupt, or unparsable blob
//! degrades to an empty list, and write failures are logged rather than
//! propagated (the in-memory return value is still produced, durability is
//! best-effort). A local personal tool should stay usable even if persistence
//! misbehaves, at the cost of potential silent data loss.

use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionPatch};

use super::kv::KeyValue;

/// The single key-value entry the collection is persisted under
pub const STORAGE_KEY: &str = "personal-finance-transactions";

/// Durable store for the transaction collection
///
/// Assumes a single logical writer (one session). Concurrent stores over the
/// same backing entry can silently overwrite each other; that is a documented
/// limitation, not a supported mode.
pub struct TransactionStore<S: KeyValue, C: Clock = SystemClock> {
    kv: S,
    clock: C,
}

impl<S: KeyValue> TransactionStore<S, SystemClock> {
    /// Create a store over the given key-value backend, using the system clock
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            clock: SystemClock,
        }
    }
}

impl<S: KeyValue, C: Clock> TransactionStore<S, C> {
    /// Create a store with an explicit clock (deterministic timestamps)
    pub fn with_clock(kv: S, clock: C) -> Self {
        Self { kv, clock }
    }

    /// Return the full persisted collection, most-recent-first
    ///
    /// Fails soft: a missing, corrupt, or unparsable blob yields an empty
    /// list. The failure is logged, never raised.
    pub fn list(&self) -> Vec<Transaction> {
        let blob = match self.kv.get(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read transaction blob, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!(error = %e, "transaction blob is unparsable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Create a new transaction from validated input
    ///
    /// Generates a fresh id, stamps `created_at = updated_at = now`, prepends
    /// the record to the collection, and persists. The new record is returned
    /// even if the write fails.
    pub fn create(&self, input: NewTransaction) -> Transaction {
        let txn = Transaction::from_input(input, self.clock.now());

        let mut transactions = self.list();
        transactions.insert(0, txn.clone());
        self.save(&transactions);

        txn
    }

    /// Merge a partial update over the record with the given id
    ///
    /// Returns `None` if no record matches. Otherwise the patch is applied in
    /// place (position, `id`, and `created_at` preserved), `updated_at` is
    /// refreshed, the collection is persisted, and the updated record is
    /// returned.
    pub fn update(&self, id: &TransactionId, patch: TransactionPatch) -> Option<Transaction> {
        let mut transactions = self.list();
        let txn = transactions.iter_mut().find(|t| t.id == *id)?;

        patch.apply_to(txn, self.clock.now());
        let updated = txn.clone();
        self.save(&transactions);

        Some(updated)
    }

    /// Remove the record with the given id
    ///
    /// Returns whether a record was actually removed; deleting a missing id
    /// is an idempotent no-op and the collection is only persisted when a
    /// removal occurred. Order of the remaining records is unchanged.
    pub fn delete(&self, id: &TransactionId) -> bool {
        let mut transactions = self.list();
        let before = transactions.len();
        transactions.retain(|t| t.id != *id);

        if transactions.len() == before {
            return false;
        }

        self.save(&transactions);
        true
    }

    /// Persist the whole collection as one serialized unit, best-effort
    fn save(&self, transactions: &[Transaction]) {
        let blob = match serde_json::to_string(transactions) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "failed to serialize transactions, skipping write");
                return;
            }
        };

        if let Err(e) = self.kv.set(STORAGE_KEY, &blob) {
            warn!(error = %e, "failed to persist transactions, in-memory result still returned");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::FintrackError;
    use crate::models::TransactionType;
    use crate::storage::kv::MemoryStore;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn test_store() -> TransactionStore<Arc<MemoryStore>, FixedClock> {
        TransactionStore::with_clock(Arc::new(MemoryStore::new()), FixedClock(test_now()))
    }

    fn expense(amount: f64, date: &str) -> NewTransaction {
        NewTransaction {
            amount,
            date: date.to_string(),
            description: "Groceries".to_string(),
            kind: TransactionType::Expense,
        }
    }

    /// Backend whose writes always fail, for the best-effort policy tests
    struct FailingStore;

    impl KeyValue for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, FintrackError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), FintrackError> {
            Err(FintrackError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = test_store();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_create_prepends_and_stamps() {
        let store = test_store();

        let first = store.create(expense(10.0, "2026-03-01"));
        let second = store.create(expense(20.0, "2026-03-02"));

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, test_now());
        assert_eq!(first.updated_at, test_now());

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        // Most-recent-first: the newest creation leads
        assert_eq!(listed[0], second);
        assert_eq!(listed[1], first);
    }

    #[test]
    fn test_create_round_trips_through_fresh_store() {
        let kv = Arc::new(MemoryStore::new());
        let store = TransactionStore::with_clock(Arc::clone(&kv), FixedClock(test_now()));

        let created = store.create(expense(42.42, "2026-02-28"));

        // A fresh store over the same backend reads the record back deep-equal
        let reopened = TransactionStore::with_clock(kv, FixedClock(test_now()));
        assert_eq!(reopened.list(), vec![created]);
    }

    #[test]
    fn test_update_merges_in_place() {
        let later = Utc.with_ymd_and_hms(2026, 3, 20, 8, 0, 0).unwrap();
        let kv = Arc::new(MemoryStore::new());
        let store = TransactionStore::with_clock(Arc::clone(&kv), FixedClock(test_now()));

        let a = store.create(expense(10.0, "2026-03-01"));
        let b = store.create(expense(20.0, "2026-03-02"));

        let updating = TransactionStore::with_clock(kv, FixedClock(later));
        let updated = updating
            .update(&a.id, TransactionPatch::new().description("Rent"))
            .unwrap();

        assert_eq!(updated.description, "Rent");
        assert_eq!(updated.amount, 10.0);
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.created_at, a.created_at);
        assert_eq!(updated.updated_at, later);

        // Position preserved: b still leads, a follows
        let listed = updating.list();
        assert_eq!(listed[0].id, b.id);
        assert_eq!(listed[1], updated);
    }

    #[test]
    fn test_update_missing_id_returns_none() {
        let store = test_store();
        store.create(expense(10.0, "2026-03-01"));

        let absent = TransactionId::new();
        assert_eq!(store.update(&absent, TransactionPatch::new().amount(1.0)), None);
    }

    #[test]
    fn test_delete_existing_removes_exactly_one() {
        let store = test_store();
        let a = store.create(expense(10.0, "2026-03-01"));
        let b = store.create(expense(20.0, "2026-03-02"));
        let c = store.create(expense(30.0, "2026-03-03"));

        assert!(store.delete(&b.id));

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        // Remainder order unchanged
        assert_eq!(listed[0].id, c.id);
        assert_eq!(listed[1].id, a.id);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = test_store();
        store.create(expense(10.0, "2026-03-01"));
        let before = store.list();

        assert!(!store.delete(&TransactionId::new()));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_corrupt_blob_degrades_to_empty() {
        let mut entries = HashMap::new();
        entries.insert(STORAGE_KEY.to_string(), "{not json".to_string());
        let kv = Arc::new(MemoryStore::with_entries(entries));
        let store = TransactionStore::with_clock(kv, FixedClock(test_now()));

        assert!(store.list().is_empty());
    }

    #[test]
    fn test_wrong_shape_blob_degrades_to_empty() {
        let mut entries = HashMap::new();
        entries.insert(STORAGE_KEY.to_string(), r#"{"transactions":[]}"#.to_string());
        let kv = Arc::new(MemoryStore::with_entries(entries));
        let store = TransactionStore::with_clock(kv, FixedClock(test_now()));

        assert!(store.list().is_empty());
    }

    #[test]
    fn test_write_failure_still_returns_record() {
        let store = TransactionStore::with_clock(FailingStore, FixedClock(test_now()));

        let txn = store.create(expense(10.0, "2026-03-01"));
        assert_eq!(txn.amount, 10.0);
        assert_eq!(txn.created_at, test_now());

        // Durability was not achieved, so nothing is listed afterwards
        assert!(store.list().is_empty());
    }
}
