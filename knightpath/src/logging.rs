//! Logging setup for KnightPath.
//!
//! The library logs through `tracing`; binaries call [`init_logging`] once
//! at startup to install the subscriber. Events go to stderr in a compact
//! single-line format, keeping stdout free for machine-readable output
//! such as the colon-delimited path listing. Verbosity is controlled via
//! the RUST_LOG environment variable and defaults to `info`.

use std::io;
use tracing_subscriber::EnvFilter;

/// Error reported when the subscriber cannot be installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global tracing subscriber.
///
/// May be called at most once per process; later calls fail rather than
/// replacing the running subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_logging() -> Result<(), InitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}
