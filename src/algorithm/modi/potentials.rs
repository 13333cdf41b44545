//! # Potential computation
//!
//! The dual side of the MODI method. Every basic cell ties its row potential to its column
//! potential through `cost = u[row] - v[column]`; with `u[0]` pinned to zero and the basic
//! cells forming a spanning tree over the row and column nodes, repeated propagation determines
//! every potential. Reduced costs of the non-basic cells then reveal the entering cell, if any.
use log::debug;

use crate::algorithm::modi::ConsistencyError;
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;
use crate::data::number_types::value::Value;

/// Row potentials `u` and column potentials `v`, fully determined.
#[derive(Debug, Eq, PartialEq)]
pub struct Potentials<F> {
    /// One value per row, `u[0] == 0` by convention.
    pub u: Vec<F>,
    /// One value per column.
    pub v: Vec<F>,
}

/// Determine all potentials by propagation over the basic cells.
///
/// Each pass derives the unknown side of every basic cell whose other side is already known.
/// A connected basic set is fully determined within `R + C` passes; running out of passes (or
/// stalling early) means the basic set is disconnected, which is an invariant violation.
///
/// # Errors
///
/// `ConsistencyError::DisconnectedBasis` when propagation stops making progress before every
/// potential is known.
pub fn compute<F: TransportNumber>(
    costs: &DenseMatrix<F>,
    basis: &[Coordinate],
) -> Result<Potentials<F>, ConsistencyError> {
    let mut u = vec![Value::Unknown; costs.nr_rows()];
    let mut v = vec![Value::Unknown; costs.nr_columns()];
    // The first row is the reference point.
    u[0] = Value::Finite(F::zero());

    for _ in 0..(costs.nr_rows() + costs.nr_columns()) {
        let mut progressed = false;

        for &coordinate in basis {
            let cost = costs.at(coordinate);
            match (u[coordinate.row].is_unknown(), v[coordinate.column].is_unknown()) {
                (false, true) => {
                    v[coordinate.column] =
                        u[coordinate.row].clone() - Value::Finite(cost.clone());
                    progressed = true;
                }
                (true, false) => {
                    u[coordinate.row] =
                        v[coordinate.column].clone() + Value::Finite(cost.clone());
                    progressed = true;
                }
                _ => {}
            }
        }

        let done = u.iter().chain(v.iter()).all(|value| !value.is_unknown());
        if done {
            let unwrap = |values: Vec<Value<F>>| {
                values.into_iter()
                    .map(|value| value.into_finite().expect("All potentials are finite."))
                    .collect()
            };
            return Ok(Potentials { u: unwrap(u), v: unwrap(v) });
        }
        if !progressed {
            break;
        }
    }

    debug!("potential propagation stalled with unknown entries");
    Err(ConsistencyError::DisconnectedBasis)
}

/// Reduced cost `u[row] - v[column] - cost` for every non-basic cell.
///
/// Basic cells hold `None`: their reduced cost is zero by construction and they are never
/// candidates for entering.
pub fn reduced_costs<F: TransportNumber>(
    costs: &DenseMatrix<F>,
    basis: &[Coordinate],
    potentials: &Potentials<F>,
) -> DenseMatrix<Option<F>> {
    DenseMatrix::from_fn(costs.nr_rows(), costs.nr_columns(), |row, column| {
        let coordinate = Coordinate::new(row, column);
        if basis.contains(&coordinate) {
            None
        } else {
            Some(
                potentials.u[row].clone()
                    - potentials.v[column].clone()
                    - costs.at(coordinate).clone(),
            )
        }
    })
}

/// The non-basic cell with the strictly greatest positive reduced cost.
///
/// `None` means no non-basic cell improves the objective: the current solution is optimal.
/// Ties keep the first candidate in row-major order.
pub fn select_entering<F: TransportNumber>(
    reduced_costs: &DenseMatrix<Option<F>>,
) -> Option<(Coordinate, F)> {
    let mut best: Option<(Coordinate, &F)> = None;

    for coordinate in reduced_costs.coordinates() {
        let Some(reduced) = reduced_costs.at(coordinate) else { continue };
        if reduced <= &F::zero() {
            continue;
        }

        match best {
            Some((_, incumbent)) if reduced <= incumbent => {}
            _ => best = Some((coordinate, reduced)),
        }
    }

    best.map(|(coordinate, reduced)| (coordinate, reduced.clone()))
}

#[cfg(test)]
mod test {
    use num::rational::Ratio;

    use crate::algorithm::modi::ConsistencyError;
    use crate::algorithm::modi::potentials::{compute, reduced_costs, select_entering};
    use crate::data::linear_algebra::Coordinate;
    use crate::data::linear_algebra::matrix::DenseMatrix;

    type T = Ratio<i64>;

    fn r(value: i64) -> T {
        Ratio::from_integer(value)
    }

    fn rm(rows: Vec<Vec<i64>>) -> DenseMatrix<T> {
        DenseMatrix::from_rows(rows.into_iter().map(|row| {
            row.into_iter().map(r).collect()
        }).collect())
    }

    #[test]
    fn potentials_of_a_spanning_basis() {
        // Basis of the north-west solution of a 2x2 problem.
        let costs = rm(vec![vec![4, 6], vec![5, 3]]);
        let basis = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        ];

        let potentials = compute(&costs, &basis).unwrap();
        // u[0] = 0; v = u - cost on basic cells; u[1] = v[1] + cost.
        assert_eq!(potentials.u, vec![r(0), r(-3)]);
        assert_eq!(potentials.v, vec![r(-4), r(-6)]);
    }

    #[test]
    fn disconnected_basis_is_detected() {
        // Two disjoint 1-cell components cannot reach rows/columns 2.
        let costs = rm(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let basis = vec![Coordinate::new(0, 0), Coordinate::new(1, 1)];

        assert_eq!(compute(&costs, &basis), Err(ConsistencyError::DisconnectedBasis));
    }

    #[test]
    fn entering_cell_is_greatest_positive_reduced_cost() {
        let costs = rm(vec![vec![4, 6], vec![5, 3]]);
        let basis = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        ];

        let potentials = compute(&costs, &basis).unwrap();
        let reduced = reduced_costs(&costs, &basis, &potentials);

        // The only non-basic cell: u[1] - v[0] - cost = -3 + 4 - 5 = -4.
        assert_eq!(*reduced.get(1, 0), Some(r(-4)));
        assert_eq!(*reduced.get(0, 0), None);
        // Nothing positive: optimal.
        assert_eq!(select_entering(&reduced), None);
    }

    #[test]
    fn ties_keep_the_first_in_row_major_order() {
        let mut reduced = DenseMatrix::constant(None, 2, 2);
        reduced.set(0, 1, Some(r(2)));
        reduced.set(1, 0, Some(r(2)));

        assert_eq!(select_entering(&reduced), Some((Coordinate::new(0, 1), r(2))));
    }
}
