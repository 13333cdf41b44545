//! # Least-Cost rule
//!
//! The globally cheapest available cell. Greedy in the most direct sense; usually a much
//! better starting point than the north-west corner, at the price of a full scan per step.
use crate::algorithm::modi::initial::SelectionRule;
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;
use crate::data::number_types::value::Value;

/// Selects the available cell with the globally minimum cost.
///
/// Ties go to the first such cell in row-major order.
pub struct LeastCost;

impl<F: TransportNumber> SelectionRule<F> for LeastCost {
    fn new() -> Self {
        Self
    }

    fn select_cell(
        &mut self,
        costs: &DenseMatrix<Value<F>>,
        _supply: &[F],
        _demand: &[F],
    ) -> Coordinate {
        cheapest_available(costs)
    }
}

/// The minimum-cost finite cell in row-major order.
///
/// Also the terminal fallback of the Vogel rule, which is why it lives outside the trait impl.
pub(super) fn cheapest_available<F: TransportNumber>(
    costs: &DenseMatrix<Value<F>>,
) -> Coordinate {
    costs.coordinates()
        .filter(|&coordinate| !costs.at(coordinate).is_infinite())
        .min_by(|&a, &b| costs.at(a).cmp_known(costs.at(b)))
        .expect("No available cell remains.")
}
