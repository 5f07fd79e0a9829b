//! Search daemon processing queued path requests.
//!
//! The [`SearchDaemon`] is a long-running background task that:
//! - Receives path requests via a channel
//! - Runs the request orchestrator for each (cache lookup, search, publish)
//! - Surfaces publish failures in the log, never silently dropping a request
//!
//! ```text
//! PathRequest ──► ┌───────────────┐      hit ┌──────────────┐
//!                 │ Result cache  │─────────►│ Operation    │
//!                 └──────┬────────┘          │ store        │
//!                        │ miss              └──────▲───────┘
//!                        ▼                          │
//!                 ┌───────────────┐                 │
//!                 │ Path finder   │─────────────────┘
//!                 └───────────────┘
//! ```
//!
//! The search itself is a bounded synchronous computation (a few hundred
//! nodes at most), so requests are handled inline on the daemon task with
//! no cancellation mid-search.

use crate::cache::PathCache;
use crate::runtime::{PathRequest, RuntimeConfig};
use crate::service::MoveProcessor;
use crate::store::OperationStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// The search daemon.
///
/// Owns the receiving end of the request channel and the orchestrator that
/// processes each request. Runs until the shutdown token fires.
pub struct SearchDaemon {
    /// Request orchestrator; holds handles to the shared stores.
    processor: MoveProcessor,

    /// Channel receiver for requests.
    request_rx: mpsc::Receiver<PathRequest>,
}

impl SearchDaemon {
    /// Creates a new daemon with its channel.
    ///
    /// Returns the daemon and a sender that can be cloned for submitters.
    ///
    /// # Arguments
    ///
    /// * `config` - Runtime configuration (channel capacity)
    /// * `cache` - Shared result cache
    /// * `store` - Shared operation store
    pub fn new(
        config: &RuntimeConfig,
        cache: Arc<PathCache>,
        store: Arc<OperationStore>,
    ) -> (Self, mpsc::Sender<PathRequest>) {
        let (request_tx, request_rx) = mpsc::channel(config.channel_capacity);
        let daemon = Self {
            processor: MoveProcessor::new(cache, store),
            request_rx,
        };
        (daemon, request_tx)
    }

    /// Runs the daemon until shutdown is signalled.
    pub async fn run(self, shutdown: CancellationToken) {
        info!("Search daemon starting");

        let Self {
            processor,
            mut request_rx,
        } = self;

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("Search daemon shutting down");
                    break;
                }

                Some(request) = request_rx.recv() => {
                    Self::handle_request(&processor, request);
                }
            }
        }

        info!("Search daemon stopped");
    }

    fn handle_request(processor: &MoveProcessor, request: PathRequest) {
        debug!(
            operation_id = %request.operation_id,
            knight_move = %request.knight_move,
            "Path request received"
        );

        match processor.process(request.operation_id, request.knight_move) {
            Ok(()) => {
                debug!(
                    operation_id = %request.operation_id,
                    "Path request completed"
                );
            }
            Err(e) => {
                // The id was already claimed; the original record stands.
                error!(
                    operation_id = %request.operation_id,
                    knight_move = %request.knight_move,
                    error = %e,
                    "Failed to publish path result"
                );
            }
        }
    }
}
