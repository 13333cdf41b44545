//! # North-West Corner rule
//!
//! Always the lexicographically first available cell, starting in the top-left corner and
//! drifting right and down as lines retire. Costs play no part in the selection.
use crate::algorithm::modi::initial::SelectionRule;
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;
use crate::data::number_types::value::Value;

/// Selects the first available cell in row-major order.
pub struct NorthWestCorner;

impl<F: TransportNumber> SelectionRule<F> for NorthWestCorner {
    fn new() -> Self {
        Self
    }

    fn select_cell(
        &mut self,
        costs: &DenseMatrix<Value<F>>,
        _supply: &[F],
        _demand: &[F],
    ) -> Coordinate {
        costs.coordinates()
            .find(|&coordinate| !costs.at(coordinate).is_infinite())
            .expect("No available cell remains.")
    }
}

#[cfg(test)]
mod test {
    use num::rational::Ratio;

    use crate::algorithm::modi::initial::{NorthWestCorner, SelectionRule};
    use crate::data::linear_algebra::Coordinate;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::number_types::value::Value;

    type T = Ratio<i64>;

    #[test]
    fn ignores_cost_skips_retired_lines() {
        let mut costs = DenseMatrix::from_rows(vec![
            vec![Value::Finite(Ratio::from_integer(9)), Value::Finite(Ratio::from_integer(1))],
            vec![Value::Finite(Ratio::from_integer(1)), Value::Finite(Ratio::from_integer(1))],
        ]);
        let supply = vec![Ratio::from_integer(1); 2];
        let demand = vec![Ratio::from_integer(1); 2];

        let mut rule = <NorthWestCorner as SelectionRule<T>>::new();
        assert_eq!(rule.select_cell(&costs, &supply, &demand), Coordinate::new(0, 0));

        // Retire the first column; the corner moves right, not to the cheaper second row.
        costs.set(0, 0, Value::Infinity);
        costs.set(1, 0, Value::Infinity);
        assert_eq!(rule.select_cell(&costs, &supply, &demand), Coordinate::new(0, 1));
    }
}
