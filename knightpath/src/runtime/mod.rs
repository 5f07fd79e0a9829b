//! KnightPath delivery runtime.
//!
//! This module provides the asynchronous delivery mechanism that carries a
//! submitted move request from submission to processing. The runtime owns
//! the request channel and the background [`SearchDaemon`], and manages
//! their lifecycle.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     KnightPathRuntime                      │
//! │                                                            │
//! │  ┌──────────────┐                   ┌──────────────────┐   │
//! │  │ Sender       │──────────────────►│ SearchDaemon     │   │
//! │  │ (service,    │   PathRequest     │ (background      │   │
//! │  │  CLI)        │   channel         │  task)           │   │
//! │  └──────────────┘                   └──────────────────┘   │
//! │                                                            │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use knightpath::runtime::{KnightPathRuntime, RuntimeConfig};
//!
//! let runtime = KnightPathRuntime::new(cache, store, RuntimeConfig::default());
//! let sender = runtime.request_sender();
//!
//! // When shutting down
//! runtime.shutdown().await;
//! ```

mod daemon;
mod request;

pub use daemon::SearchDaemon;
pub use request::PathRequest;

use crate::cache::PathCache;
use crate::store::OperationStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Default capacity of the request channel.
pub const DEFAULT_REQUEST_CHANNEL_CAPACITY: usize = 1000;

/// Configuration for the KnightPath runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Request channel capacity.
    pub channel_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_REQUEST_CHANNEL_CAPACITY,
        }
    }
}

impl RuntimeConfig {
    /// Set the channel capacity for path requests.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }
}

/// The KnightPath runtime.
///
/// Spawns the search daemon as a background task, hands out the request
/// sender for submitters, and coordinates graceful shutdown.
///
/// # Lifecycle
///
/// 1. **Creation**: `new()` creates the channel and spawns the daemon task
/// 2. **Operation**: submitters use `request_sender()` to queue moves
/// 3. **Shutdown**: `shutdown()` cancels the daemon and waits for completion
pub struct KnightPathRuntime {
    /// Sender handed to submitters.
    request_tx: mpsc::Sender<PathRequest>,

    /// Handle to the daemon background task.
    daemon_handle: Option<JoinHandle<()>>,

    /// Shutdown token for graceful termination.
    shutdown_token: CancellationToken,
}

impl KnightPathRuntime {
    /// Create a new runtime over the shared stores.
    ///
    /// This starts the search daemon in a background task immediately, so
    /// it must be called from within a Tokio runtime.
    pub fn new(cache: Arc<PathCache>, store: Arc<OperationStore>, config: RuntimeConfig) -> Self {
        info!("Starting KnightPath runtime");

        let (daemon, request_tx) = SearchDaemon::new(&config, cache, store);

        let shutdown_token = CancellationToken::new();
        let daemon_shutdown = shutdown_token.clone();
        let daemon_handle = Some(tokio::spawn(async move {
            daemon.run(daemon_shutdown).await;
        }));

        info!("KnightPath runtime started");

        Self {
            request_tx,
            daemon_handle,
            shutdown_token,
        }
    }

    /// Get a sender for submitting path requests.
    ///
    /// The sender can be cloned and shared with any component that needs
    /// to queue moves for processing.
    pub fn request_sender(&self) -> mpsc::Sender<PathRequest> {
        self.request_tx.clone()
    }

    /// Check if the runtime is still accepting requests.
    ///
    /// Returns `false` once the daemon has stopped and dropped its end of
    /// the channel.
    pub fn is_running(&self) -> bool {
        !self.request_tx.is_closed()
    }

    /// Get the shutdown token for external coordination.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Cancels the daemon and waits for it to finish its current request
    /// before returning.
    pub async fn shutdown(mut self) {
        info!("Shutting down KnightPath runtime");

        self.shutdown_token.cancel();

        if let Some(handle) = self.daemon_handle.take() {
            match handle.await {
                Ok(()) => info!("Search daemon shut down cleanly"),
                Err(e) => tracing::error!("Search daemon task panicked: {}", e),
            }
        }

        info!("KnightPath runtime stopped");
    }
}
