//! Grid coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` coordinate into a [`Grid`](crate::Grid).
///
/// Row 0 is the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Create a location.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The location of the first cell of the header row.
    #[must_use]
    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Whether this location is in the header row.
    #[must_use]
    pub const fn is_header_row(&self) -> bool {
        self.row == 0
    }

    /// The same row, a different column.
    #[must_use]
    pub const fn with_col(self, col: usize) -> Self {
        Self { row: self.row, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Row: {}, Col: {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Location::new(3, 7).to_string(), "(Row: 3, Col: 7)");
    }

    #[test]
    fn test_header_row() {
        assert!(Location::origin().is_header_row());
        assert!(Location::new(0, 4).is_header_row());
        assert!(!Location::new(1, 0).is_header_row());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut locations = vec![Location::new(1, 0), Location::new(0, 2), Location::new(0, 1)];
        locations.sort();
        assert_eq!(
            locations,
            vec![Location::new(0, 1), Location::new(0, 2), Location::new(1, 0)]
        );
    }
}
