//! Request orchestrator.
//!
//! Composes the result cache, the path finder, and the operation store:
//! look up or compute the move, then publish the result under the request's
//! operation id.

use crate::board::Move;
use crate::cache::PathCache;
use crate::store::{OperationStore, StoreError};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Orchestrates processing of one queued move request.
///
/// Shared stores go in, results come out through the operation store. The
/// two publish steps are not atomic across stores: a result may briefly
/// exist in the cache before its operation record appears.
pub struct MoveProcessor {
    cache: Arc<PathCache>,
    store: Arc<OperationStore>,
}

impl MoveProcessor {
    /// Create a processor over the shared stores.
    pub fn new(cache: Arc<PathCache>, store: Arc<OperationStore>) -> Self {
        Self { cache, store }
    }

    /// Processes one request: cache lookup or search, then publish.
    ///
    /// A cache hit skips the search entirely and stores the cached result
    /// under the new operation id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateOperation`] if the operation id
    /// already has a stored result. Ids are unique per request, so this
    /// indicates double processing and must be surfaced, not swallowed.
    pub fn process(&self, operation_id: Uuid, knight_move: Move) -> Result<(), StoreError> {
        let path = self.cache.get_or_compute(knight_move);

        debug!(
            operation_id = %operation_id,
            knight_move = %knight_move,
            move_count = path.move_count,
            paths = path.path_count(),
            "Move processed"
        );

        self.store.put(operation_id, path)?;
        Ok(())
    }
}
