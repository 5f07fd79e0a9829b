//! Request type for daemon communication.
//!
//! A [`PathRequest`] is the message sent from the submitting side (service
//! facade, CLI) to the search daemon via the runtime channel. Requests are
//! fire-and-forget: the submitter already holds the operation id and
//! collects the result later through the operation store.

use crate::board::Move;
use uuid::Uuid;

/// Request to compute the shortest paths for a move.
///
/// Pairs the caller-facing operation id with the move to search. The id is
/// generated once at submission time and is the only handle the submitter
/// ever gets back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRequest {
    /// Identifier the result will be stored under.
    pub operation_id: Uuid,

    /// The move to be processed.
    pub knight_move: Move,
}

impl PathRequest {
    /// Creates a request for an already-generated operation id.
    pub fn new(operation_id: Uuid, knight_move: Move) -> Self {
        Self {
            operation_id,
            knight_move,
        }
    }

    /// Creates a request with a freshly generated v4 operation id.
    ///
    /// Returns the request and the id to hand back to the submitter.
    pub fn generate(knight_move: Move) -> (Self, Uuid) {
        let operation_id = Uuid::new_v4();
        (Self::new(operation_id, knight_move), operation_id)
    }
}
