//! # The pivot
//!
//! One basis change: quantity is shifted around the closed loop, the entering cell becomes
//! basic and the odd-position cell that hit zero leaves. Exactly one entering/leaving swap
//! happens per call.
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;

/// What a pivot did, for reporting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pivot<F> {
    /// Quantity shifted around the loop. Zero for degenerate pivots.
    pub theta: F,
    /// The basic cell that was replaced by the entering cell.
    pub leaving: Coordinate,
}

/// Shift quantity around the loop and swap the leaving cell for the entering one.
///
/// Cells at even positions of the cycle (the entering cell included) gain `theta`, cells at
/// odd positions lose it. `theta` is the smallest assignment among the odd-position cells; on
/// ties the first minimal one in cycle order leaves, so the choice is deterministic. The
/// entering cell takes over the leaving cell's position in the basis ordering.
pub fn apply<F: TransportNumber>(
    cycle: &[Coordinate],
    assignment: &mut DenseMatrix<F>,
    basis: &mut [Coordinate],
) -> Pivot<F> {
    debug_assert!(cycle.len() >= 4 && cycle.len() % 2 == 0);

    let (leaving, theta) = cycle.iter()
        .enumerate()
        .skip(1)
        .step_by(2)
        .map(|(_, &coordinate)| (coordinate, assignment.at(coordinate)))
        .fold(None, |best: Option<(Coordinate, &F)>, (coordinate, quantity)| {
            match best {
                Some((_, minimum)) if minimum <= quantity => best,
                _ => Some((coordinate, quantity)),
            }
        })
        .map(|(coordinate, quantity)| (coordinate, quantity.clone()))
        .expect("Cycles contain odd positions.");

    for (position, &coordinate) in cycle.iter().enumerate() {
        if position == 0 {
            // The entering cell held no quantity; it receives exactly theta.
            assignment.set(coordinate.row, coordinate.column, theta.clone());
        } else if position % 2 == 0 {
            *assignment.at_mut(coordinate) += theta.clone();
        } else {
            *assignment.at_mut(coordinate) -= theta.clone();
        }
    }

    let position = basis.iter()
        .position(|&coordinate| coordinate == leaving)
        .expect("The leaving cell is basic.");
    basis[position] = cycle[0];

    Pivot { theta, leaving }
}
