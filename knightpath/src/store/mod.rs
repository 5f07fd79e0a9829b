//! Single-consumption operation store.
//!
//! Associates a caller-supplied operation id with a computed result and
//! hands the result out exactly once: retrieval atomically removes the
//! record, so a second reader observes "not found" exactly as if the id had
//! never been created.
//!
//! Identifier *string* validation (malformed or nil UUIDs) happens at the
//! service layer before this store is consulted; those are input errors,
//! distinct from not-found.

use crate::finder::KnightPath;
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Store-related errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The operation id is already present.
    ///
    /// Ids are generated once per submitted request, so a collision means
    /// the same request was processed twice. Fatal, non-retryable.
    #[error("Operation {0} already has a stored result")]
    DuplicateOperation(Uuid),
}

/// Concurrent map from operation id to computed result.
///
/// Records are immutable behind `Arc`; insert and take are single atomic
/// map operations, so no reader can observe a half-written record and no
/// two readers can consume the same one.
#[derive(Debug, Default)]
pub struct OperationStore {
    records: DashMap<Uuid, Arc<KnightPath>>,
}

impl OperationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates the id with a result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateOperation`] if the id is already
    /// present; the existing record is left untouched.
    pub fn put(&self, operation_id: Uuid, path: Arc<KnightPath>) -> Result<(), StoreError> {
        match self.records.entry(operation_id) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(StoreError::DuplicateOperation(operation_id))
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(path);
                Ok(())
            }
        }
    }

    /// Atomically retrieves and deletes the record for the id.
    ///
    /// Returns `None` both when the id was never created and when its
    /// record was already consumed. At most one caller ever receives the
    /// record for a given id.
    pub fn take(&self, operation_id: Uuid) -> Option<Arc<KnightPath>> {
        self.records
            .remove(&operation_id)
            .map(|(_, path)| path)
    }

    /// Number of unconsumed records.
    pub fn pending_count(&self) -> usize {
        self.records.len()
    }
}
