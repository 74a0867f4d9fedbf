//! Board coordinates and line-of-sight addressing.
//!
//! A `Coordinate` is a (row, column) pair. The boundary layer addresses cells
//! with `"row_col"` strings, so `Coordinate` parses from and formats to that
//! form, and serializes as it.
//!
//! ```
//! use stratego_engine::core::Coordinate;
//!
//! let c: Coordinate = "6_4".parse().unwrap();
//! assert_eq!(c, Coordinate::new(6, 4));
//! assert_eq!(c.to_string(), "6_4");
//! ```
//!
//! Rows and columns are signed so that out-of-range input such as `"-1_3"`
//! still parses and is rejected by the bounds check instead of at the parser.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::error::RuleError;

/// Cells strictly between two points on a line. A 10-wide board never needs
/// more than 8.
pub type Path = SmallVec<[Coordinate; 8]>;

/// A board cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check the coordinate lies inside a `rows` × `cols` board.
    #[must_use]
    pub fn within_bounds(self, rows: i32, cols: i32) -> bool {
        (0..rows).contains(&self.row) && (0..cols).contains(&self.col)
    }

    /// Taxicab distance between two cells.
    #[must_use]
    pub fn manhattan(self, other: Coordinate) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Check two cells share a row or a column.
    #[must_use]
    pub fn is_straight_line(self, other: Coordinate) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Check two cells are orthogonal neighbours.
    #[must_use]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.is_straight_line(other) && self.manhattan(other) == 1
    }

    /// Enumerate every cell strictly between `self` and `to`, walking from
    /// `self` toward `to`.
    ///
    /// Returns an empty path for identical or adjacent cells, and for
    /// diagonal pairs (those are rejected before any tracing happens).
    #[must_use]
    pub fn cells_between(self, to: Coordinate) -> Path {
        if !self.is_straight_line(to) {
            return Path::new();
        }

        let step_row = (to.row - self.row).signum();
        let step_col = (to.col - self.col).signum();
        let steps = self.manhattan(to).saturating_sub(1);

        (1..=steps as i32)
            .map(|i| Coordinate::new(self.row + step_row * i, self.col + step_col * i))
            .collect()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RuleError::InvalidCoordinate(s.to_string());

        let (row, col) = s.split_once('_').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

impl TryFrom<String> for Coordinate {
    type Error = RuleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(value: Coordinate) -> Self {
        value.to_string()
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_parse_and_display() {
        let parsed: Coordinate = "3_7".parse().unwrap();
        assert_eq!(parsed, c(3, 7));
        assert_eq!(parsed.to_string(), "3_7");

        let negative: Coordinate = "-1_0".parse().unwrap();
        assert_eq!(negative, c(-1, 0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "3", "3-7", "a_b", "3_", "_7", "3_7_1"] {
            assert_eq!(
                bad.parse::<Coordinate>(),
                Err(RuleError::InvalidCoordinate(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_bounds() {
        assert!(c(0, 0).within_bounds(10, 10));
        assert!(c(9, 9).within_bounds(10, 10));
        assert!(!c(10, 0).within_bounds(10, 10));
        assert!(!c(0, -1).within_bounds(10, 10));
    }

    #[test]
    fn test_straight_line_and_adjacency() {
        assert!(c(2, 2).is_straight_line(c(2, 9)));
        assert!(c(2, 2).is_straight_line(c(7, 2)));
        assert!(!c(2, 2).is_straight_line(c(3, 3)));

        assert!(c(4, 4).is_adjacent(c(4, 5)));
        assert!(c(4, 4).is_adjacent(c(3, 4)));
        assert!(!c(4, 4).is_adjacent(c(5, 5)));
        assert!(!c(4, 4).is_adjacent(c(4, 6)));
        assert!(!c(4, 4).is_adjacent(c(4, 4)));
    }

    #[test]
    fn test_cells_between_row() {
        let path = c(0, 1).cells_between(c(0, 5));
        assert_eq!(path.as_slice(), &[c(0, 2), c(0, 3), c(0, 4)]);
    }

    #[test]
    fn test_cells_between_walks_toward_target() {
        let path = c(8, 3).cells_between(c(5, 3));
        assert_eq!(path.as_slice(), &[c(7, 3), c(6, 3)]);
    }

    #[test]
    fn test_cells_between_short_and_diagonal() {
        assert!(c(1, 1).cells_between(c(1, 2)).is_empty());
        assert!(c(1, 1).cells_between(c(1, 1)).is_empty());
        assert!(c(1, 1).cells_between(c(4, 4)).is_empty());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&c(6, 6)).unwrap();
        assert_eq!(json, "\"6_6\"");

        let back: Coordinate = serde_json::from_str("\"9_3\"").unwrap();
        assert_eq!(back, c(9, 3));

        assert!(serde_json::from_str::<Coordinate>("\"nine_three\"").is_err());
    }
}
