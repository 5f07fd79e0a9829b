//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use knightpath::service::ServiceError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to queue the move
    Submit(ServiceError),
    /// Failed to collect the result
    Collect(ServiceError),
    /// The result did not arrive in time
    Timeout(u64),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Submit(e) if e.is_input_error() => {
                eprintln!();
                eprintln!("Positions are algebraic squares:");
                eprintln!("  1. A file letter between A and H");
                eprintln!("  2. Followed by a rank digit between 1 and 8");
                eprintln!("Example: knightpath A1 F6");
            }
            CliError::Timeout(_) => {
                eprintln!();
                eprintln!("The background search did not publish a result in time.");
                eprintln!("Re-run with RUST_LOG=debug for daemon diagnostics.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Submit(e) => write!(f, "Failed to queue move: {}", e),
            CliError::Collect(e) => write!(f, "Failed to collect result: {}", e),
            CliError::Timeout(ms) => {
                write!(f, "No result after {} ms", ms)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Submit(e) | CliError::Collect(e) => Some(e),
            _ => None,
        }
    }
}
