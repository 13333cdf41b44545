//! # Linear algebra
//!
//! The dense containers the tableau is built from, and the coordinate type identifying a cell.
use std::fmt;

pub mod matrix;

/// Identifies one cell of the transportation tableau.
///
/// Rows correspond to sources (supply), columns to sinks (demand).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Source index, `0 <= row < R`.
    pub row: usize,
    /// Sink index, `0 <= column < C`.
    pub column: usize,
}

impl Coordinate {
    /// A plain constructor.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Whether the other cell lies in the same row or the same column.
    ///
    /// Two such cells can be connected by a single horizontal or vertical move.
    pub fn shares_line_with(&self, other: &Self) -> bool {
        self.row == other.row || self.column == other.column
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
