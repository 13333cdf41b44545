//! # Error reporting for problem construction
//!
//! A model that cannot describe a solvable transportation problem is rejected at construction
//! time. Nothing in this module is recoverable: the caller's input needs to change.
use std::error::Error;
use std::fmt;

/// A `ModelError` is created when the problem description is rejected during validation.
///
/// These are configuration errors in the sense that they can only be caused by the caller's
/// input, never by the solver's own state.
#[derive(Debug, Eq, PartialEq)]
pub enum ModelError {
    /// The cost matrix has no rows or no columns.
    Empty,
    /// A cost row has a different length than the first row.
    RaggedCosts {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A supply or demand vector length doesn't match the cost matrix.
    DimensionMismatch {
        /// Which vector was inconsistent, for the end user.
        quantity: &'static str,
        /// Length the cost matrix implies.
        expected: usize,
        /// Length that was provided.
        found: usize,
    },
    /// A supply or demand quantity is negative.
    Negative {
        /// Which vector held the offending value.
        quantity: &'static str,
        /// Index of the offending value.
        index: usize,
    },
    /// Total supply differs from total demand and the balance policy forbids correcting it.
    ///
    /// The totals are rendered to text so that this error is independent of the number type.
    Unbalanced {
        /// Total supply over all sources.
        total_supply: String,
        /// Total demand over all sinks.
        total_demand: String,
    },
    /// A row or column name collection doesn't match the cost matrix.
    NameMismatch {
        /// Which axis was inconsistent.
        axis: &'static str,
        /// Length the cost matrix implies.
        expected: usize,
        /// Length that was provided.
        found: usize,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::Empty => write!(f, "the cost matrix has no rows or no columns"),
            ModelError::RaggedCosts { row, expected, found } => write!(
                f,
                "cost row {} has {} cells, the first row has {}",
                row, found, expected,
            ),
            ModelError::DimensionMismatch { quantity, expected, found } => write!(
                f,
                "{} vector has length {}, the cost matrix requires {}",
                quantity, found, expected,
            ),
            ModelError::Negative { quantity, index } => {
                write!(f, "{} at index {} is negative", quantity, index)
            }
            ModelError::Unbalanced { total_supply, total_demand } => write!(
                f,
                "total supply {} differs from total demand {}",
                total_supply, total_demand,
            ),
            ModelError::NameMismatch { axis, expected, found } => write!(
                f,
                "{} names have length {}, the cost matrix requires {}",
                axis, found, expected,
            ),
        }
    }
}

impl Error for ModelError {
}
