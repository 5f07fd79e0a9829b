//! Search result types

use crate::board::Square;

/// Separator between square labels in a rendered path.
pub const PATH_SEPARATOR: &str = ":";

/// All shortest knight paths between two squares.
///
/// Every entry in `shortest_paths` is a colon-delimited sequence of square
/// labels from `start` to `target` inclusive, e.g. `A1:C2:E3:G4:F6`. All
/// entries describe exactly `move_count` knight moves; results are immutable
/// once built and are shared between the caches behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnightPath {
    /// Square the search started from
    pub start: Square,
    /// Square the search ended on
    pub target: Square,
    /// Every shortest path, in discovery order
    pub shortest_paths: Vec<String>,
    /// Number of knight moves shared by all paths
    pub move_count: u32,
}

impl KnightPath {
    /// Label of the starting square, e.g. `A1`.
    pub fn starting(&self) -> String {
        self.start.label()
    }

    /// Label of the target square, e.g. `F6`.
    pub fn ending(&self) -> String {
        self.target.label()
    }

    /// Number of distinct shortest paths found.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.shortest_paths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_labels() {
        let path = KnightPath {
            start: Square::new(0, 0),
            target: Square::new(5, 5),
            shortest_paths: vec![String::from("A1:C2:E3:G4:F6")],
            move_count: 4,
        };

        assert_eq!(path.starting(), "A1");
        assert_eq!(path.ending(), "F6");
        assert_eq!(path.path_count(), 1);
    }
}
