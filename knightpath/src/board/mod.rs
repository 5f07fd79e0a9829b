//! Board geometry module
//!
//! Provides the square and move value types, the eight knight offsets, and
//! parsing of algebraic positions (such as `A1` or `F6`) into validated
//! board squares.

mod types;

pub use types::{
    is_on_board, BoardError, KnightMovesIterator, Move, Square, BOARD_SIZE, KNIGHT_OFFSETS,
    MAX_COORD, MIN_COORD,
};

/// Parses an algebraic position into a validated square.
///
/// Input is trimmed of surrounding whitespace and matched
/// case-insensitively, so `"  g8 "` parses the same as `"G8"`.
///
/// # Arguments
///
/// * `position` - Two-character position string: file letter `A`-`H`
///   followed by rank digit `1`-`8`
///
/// # Returns
///
/// A `Result` containing the square or an error describing which part of
/// the input was invalid.
pub fn parse_position(position: &str) -> Result<Square, BoardError> {
    let trimmed = position.trim();
    if trimmed.is_empty() {
        return Err(BoardError::Empty);
    }

    let mut chars = trimmed.chars();
    let (file_char, rank_char) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => (file, rank),
        _ => return Err(BoardError::InvalidLength(trimmed.chars().count())),
    };

    let file_char = file_char.to_ascii_uppercase();
    if !('A'..='H').contains(&file_char) {
        return Err(BoardError::InvalidFile(file_char));
    }

    if !('1'..='8').contains(&rank_char) {
        return Err(BoardError::InvalidRank(rank_char));
    }

    Ok(Square {
        file: (file_char as u8 - b'A') as i8,
        rank: (rank_char as u8 - b'1') as i8,
    })
}
