//! Service error types.

use crate::board::BoardError;
use crate::store::StoreError;
use std::fmt;

/// Errors that can occur at the service surface.
///
/// Input errors (`InvalidPosition`, `InvalidOperationId`,
/// `EmptyOperationId`) are the caller's fault and are reported before any
/// state changes. `QueueUnavailable` and `Publish` are internal failures
/// that should not occur under correct sequencing.
#[derive(Debug)]
pub enum ServiceError {
    /// A position string failed to parse
    InvalidPosition(BoardError),
    /// The operation id string is not a well-formed UUID
    InvalidOperationId(String),
    /// The operation id is the all-zero UUID
    EmptyOperationId,
    /// The request channel is closed or full
    QueueUnavailable(String),
    /// Publishing a result failed
    Publish(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(e) => write!(f, "Invalid position: {}", e),
            Self::InvalidOperationId(id) => {
                write!(f, "Operation id '{}' is not a valid identifier", id)
            }
            Self::EmptyOperationId => write!(f, "Operation id is empty"),
            Self::QueueUnavailable(msg) => {
                write!(f, "Request queue is unavailable: {}", msg)
            }
            Self::Publish(e) => write!(f, "Failed to publish result: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPosition(e) => Some(e),
            Self::Publish(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for ServiceError {
    fn from(e: BoardError) -> Self {
        Self::InvalidPosition(e)
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        Self::Publish(e)
    }
}

impl ServiceError {
    /// True if the error is the caller's fault rather than an internal one.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPosition(_) | Self::InvalidOperationId(_) | Self::EmptyOperationId
        )
    }
}
