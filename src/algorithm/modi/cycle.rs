//! # Cycle detection
//!
//! An entering cell, together with the basic cells, induces exactly one closed loop that
//! alternates horizontal and vertical moves; the pivot shifts quantity around that loop. The
//! loop is found with a breadth-first search over partial paths, so the first hit is also the
//! shortest, canonical one.
use std::collections::VecDeque;

use crate::algorithm::modi::ConsistencyError;
use crate::data::linear_algebra::Coordinate;

/// Direction of the move between two consecutive cells of a path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    /// The cells share a row.
    Horizontal,
    /// The cells share a column.
    Vertical,
}

impl Direction {
    fn between(from: Coordinate, to: Coordinate) -> Option<Self> {
        if from.row == to.row {
            Some(Direction::Horizontal)
        } else if from.column == to.column {
            Some(Direction::Vertical)
        } else {
            None
        }
    }

    fn opposite(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

/// Find the closed loop induced by an entering cell.
///
/// The returned path starts at the entering cell, visits basic cells only, alternates
/// horizontal and vertical moves (including the implicit closing move back to the start) and
/// has even length of at least four.
///
/// # Errors
///
/// `ConsistencyError::NoCycle` when no loop exists. Given the spanning-tree invariant of the
/// basic set this cannot happen for a genuine entering cell, so it is reported as a fatal
/// inconsistency rather than as an optimum.
pub fn find_cycle(
    entering: Coordinate,
    basis: &[Coordinate],
) -> Result<Vec<Coordinate>, ConsistencyError> {
    debug_assert!(!basis.contains(&entering));

    let mut queue = VecDeque::new();
    queue.push_back(vec![entering]);

    while let Some(path) = queue.pop_front() {
        let last = *path.last().expect("Paths are never empty.");
        let last_direction = if path.len() >= 2 {
            Direction::between(path[path.len() - 2], last)
        } else {
            None
        };

        // A closed loop: even length, at least four cells, and the closing move continues the
        // alternation. With even length the closing move is then also orthogonal to the first.
        if path.len() >= 4 && path.len() % 2 == 0 {
            let closing = last_direction
                .expect("Paths of length at least two have a last direction.")
                .opposite();
            let closes = match closing {
                Direction::Horizontal => last.row == entering.row,
                Direction::Vertical => last.column == entering.column,
            };
            if closes {
                return Ok(path);
            }
        }

        for &candidate in basis {
            if path.contains(&candidate) {
                continue;
            }
            let Some(direction) = Direction::between(last, candidate) else { continue };
            if last_direction == Some(direction) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(candidate);
            queue.push_back(extended);
        }
    }

    Err(ConsistencyError::NoCycle(entering))
}
