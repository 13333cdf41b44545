//! # The MODI method
//!
//! This module contains all data structures and logic specific to the MODI (modified
//! distribution) method, also known as the stepping-stone method with dual potentials. An
//! initial basic feasible solution is produced by one of the heuristics in [`initial`], after
//! which [`Tableau::step`] repeatedly selects an improving non-basic cell through row and
//! column potentials, finds the closed loop it induces through the basic cells and shifts
//! quantity around that loop until no improving cell remains.
use std::error::Error;
use std::fmt;

use crate::data::linear_algebra::Coordinate;

pub mod cycle;
pub mod initial;
pub mod pivot;
pub mod potentials;
pub mod record;
pub mod tableau;

pub use initial::InitialBasisRule;
pub use tableau::Tableau;

/// What a single call to [`Tableau::step`] did.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome<F> {
    /// An improving cell was found and one pivot was applied.
    Pivoted {
        /// Cell that entered the basic set.
        entering: Coordinate,
        /// Cell that left the basic set.
        leaving: Coordinate,
        /// Quantity shifted around the loop. Zero for degenerate pivots.
        theta: F,
    },
    /// No non-basic cell improves the objective; the tableau is now solved.
    Optimal(F),
    /// The tableau was already solved; nothing was done.
    AlreadySolved,
}

/// An invariant of the algorithm was violated.
///
/// These should never occur for a valid balanced model: each variant indicates a bug or a
/// corrupted basic-cell set, not bad user input. They are surfaced as errors rather than left
/// as infinite loops or silent wrong answers.
#[derive(Debug, Eq, PartialEq)]
pub enum ConsistencyError {
    /// Potential propagation made no progress before all potentials were known.
    ///
    /// The basic cells then don't form a connected (spanning tree) structure over the row and
    /// column nodes.
    DisconnectedBasis,
    /// No closed loop through the basic cells exists for this entering cell.
    NoCycle(Coordinate),
    /// The basic set does not hold exactly `R + C - 1` cells.
    BasisSize {
        /// `R + C - 1`.
        expected: usize,
        /// Actual size of the basic set.
        found: usize,
    },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConsistencyError::DisconnectedBasis => {
                write!(f, "basic cells don't form a connected spanning structure")
            }
            ConsistencyError::NoCycle(coordinate) => {
                write!(f, "no closed loop exists for entering cell {}", coordinate)
            }
            ConsistencyError::BasisSize { expected, found } => {
                write!(f, "basic set has {} cells, expected {}", found, expected)
            }
        }
    }
}

impl Error for ConsistencyError {
}

/// Why driving a tableau to optimality failed.
#[derive(Debug, Eq, PartialEq)]
pub enum SolveError {
    /// An invariant was violated during an iteration.
    Consistency(ConsistencyError),
    /// The pivot cap of `R * C` was reached without optimality; degenerate cycling suspected.
    PivotLimit(usize),
}

impl From<ConsistencyError> for SolveError {
    fn from(error: ConsistencyError) -> Self {
        SolveError::Consistency(error)
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Consistency(error) => error.fmt(f),
            SolveError::PivotLimit(limit) => {
                write!(f, "not optimal after {} pivots, cycling suspected", limit)
            }
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Consistency(error) => Some(error),
            SolveError::PivotLimit(_) => None,
        }
    }
}
