//! KnightPath - Shortest knight path search service
//!
//! This library computes every shortest sequence of legal knight moves
//! between two squares of a standard 8×8 chessboard and makes each result
//! collectible exactly once by operation id.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use knightpath::runtime::RuntimeConfig;
//! use knightpath::service::KnightPathService;
//!
//! let (service, runtime) = KnightPathService::start(RuntimeConfig::default());
//!
//! // Submit a move; processing happens on the background daemon
//! let operation_id = service.queue_knight_move("A1", "F6")?;
//!
//! // Collect the result (consumes it; a second collection sees not-found)
//! let response = service.take_path(&operation_id.to_string())?;
//! ```
//!
//! The lower-level modules are public for direct embedding: [`board`] for
//! squares and parsing, [`finder`] for the search itself, [`cache`] and
//! [`store`] for the two result stores, and [`runtime`] for the delivery
//! channel and daemon.

pub mod board;
pub mod cache;
pub mod finder;
pub mod logging;
pub mod runtime;
pub mod service;
pub mod store;

/// Version of the KnightPath library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_board_module_exists() {
        // Verify board module is accessible
        let square = board::parse_position("F6").unwrap();
        assert_eq!(square, board::Square::new(5, 5));
    }

    #[test]
    fn test_finder_module_exists() {
        let knight_move = board::Move::new(
            board::Square::new(0, 0),
            board::Square::new(1, 2),
        );
        let result = finder::find_shortest_paths(knight_move);
        assert_eq!(result.move_count, 1);
    }
}
