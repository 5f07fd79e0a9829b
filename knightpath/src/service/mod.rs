//! KnightPath service facade.
//!
//! Encapsulates component wiring behind the two operations the outside
//! world needs: submit a move for asynchronous processing (returns an
//! operation id) and collect the result by id (consume-on-read).
//!
//! # Example
//!
//! ```ignore
//! use knightpath::service::KnightPathService;
//! use knightpath::runtime::RuntimeConfig;
//!
//! let (service, runtime) = KnightPathService::start(RuntimeConfig::default());
//!
//! let operation_id = service.queue_knight_move("A1", "F6")?;
//! // ... later ...
//! if let Some(response) = service.take_path(&operation_id.to_string())? {
//!     println!("{} moves", response.path.move_count);
//! }
//! # runtime.shutdown().await;
//! ```

mod error;
mod processor;

pub use error::ServiceError;
pub use processor::MoveProcessor;

use crate::board::{parse_position, Move};
use crate::cache::{CacheStats, PathCache};
use crate::finder::KnightPath;
use crate::runtime::{KnightPathRuntime, PathRequest, RuntimeConfig};
use crate::store::OperationStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

/// Result returned to a caller collecting a finished operation.
#[derive(Debug, Clone)]
pub struct PathResponse {
    /// The id the result was collected under.
    pub operation_id: Uuid,
    /// The computed shortest paths.
    pub path: Arc<KnightPath>,
}

/// High-level facade over the cache, store, and delivery runtime.
///
/// The service holds shared handles only, so it can be constructed next to
/// a freshly started runtime (`start`) or wired manually onto existing
/// stores and a sender (`new`) for tests and embedding.
pub struct KnightPathService {
    cache: Arc<PathCache>,
    store: Arc<OperationStore>,
    request_tx: mpsc::Sender<PathRequest>,
}

impl KnightPathService {
    /// Wire a service onto existing stores and a request sender.
    pub fn new(
        cache: Arc<PathCache>,
        store: Arc<OperationStore>,
        request_tx: mpsc::Sender<PathRequest>,
    ) -> Self {
        Self {
            cache,
            store,
            request_tx,
        }
    }

    /// Create a service together with a freshly started runtime.
    ///
    /// Must be called from within a Tokio runtime; the returned
    /// [`KnightPathRuntime`] owns the background daemon and should be shut
    /// down when the service is no longer needed.
    pub fn start(config: RuntimeConfig) -> (Self, KnightPathRuntime) {
        let cache = Arc::new(PathCache::new());
        let store = Arc::new(OperationStore::new());
        let runtime = KnightPathRuntime::new(Arc::clone(&cache), Arc::clone(&store), config);
        let service = Self::new(cache, store, runtime.request_sender());
        (service, runtime)
    }

    /// Queue a knight move for asynchronous processing.
    ///
    /// Parses both positions, generates a fresh operation id, and sends the
    /// request into the delivery channel. Nothing is mutated if parsing
    /// fails.
    ///
    /// # Arguments
    ///
    /// * `source` - Starting position, e.g. `"A1"` (case-insensitive,
    ///   surrounding whitespace ignored)
    /// * `target` - Target position, e.g. `"F6"`
    ///
    /// # Returns
    ///
    /// The operation id to collect the result with later.
    pub fn queue_knight_move(&self, source: &str, target: &str) -> Result<Uuid, ServiceError> {
        let start = parse_position(source)?;
        let target = parse_position(target)?;

        let (request, operation_id) = PathRequest::generate(Move::new(start, target));

        self.request_tx
            .try_send(request)
            .map_err(|e| ServiceError::QueueUnavailable(e.to_string()))?;

        info!(
            operation_id = %operation_id,
            start = %start,
            target = %target,
            "Knight move queued"
        );

        Ok(operation_id)
    }

    /// Collect the result for an operation id, consuming it.
    ///
    /// Returns `Ok(None)` when the id has no stored result: the request is
    /// still being processed, the id was never issued, or the result was
    /// already collected. Callers should retry later or give up; absence
    /// is not a failure.
    ///
    /// # Errors
    ///
    /// * [`ServiceError::InvalidOperationId`] - the string is not a UUID
    /// * [`ServiceError::EmptyOperationId`] - the string is the nil UUID
    pub fn take_path(&self, operation_id: &str) -> Result<Option<PathResponse>, ServiceError> {
        let id = Uuid::parse_str(operation_id.trim())
            .map_err(|_| ServiceError::InvalidOperationId(operation_id.to_string()))?;

        if id.is_nil() {
            return Err(ServiceError::EmptyOperationId);
        }

        Ok(self.store.take(id).map(|path| PathResponse {
            operation_id: id,
            path,
        }))
    }

    /// Snapshot of the result-cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of results waiting to be collected.
    pub fn pending_operations(&self) -> usize {
        self.store.pending_count()
    }
}
