//! # Initial basic feasible solutions
//!
//! Three interchangeable heuristics construct the starting point for the MODI iterations. All
//! share the same skeleton: `R + C - 1` times, select a cell (the method-specific part), assign
//! as much quantity as the cell's row and column still allow, and retire the exhausted line by
//! overwriting its costs with infinity. The heuristics differ only in how the next cell is
//! chosen, trading construction effort against the quality of the starting solution.
use std::fmt;

use log::debug;

use crate::algorithm::modi::record::{StepObserver, StepRecord};
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;
use crate::data::number_types::value::Value;

pub mod least_cost;
pub mod north_west;
pub mod vogel;

pub use least_cost::LeastCost;
pub use north_west::NorthWestCorner;
pub use vogel::VogelApproximation;

/// Which heuristic constructs the initial basic feasible solution.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InitialBasisRule {
    /// Lexicographically first available cell. Ignores cost entirely; fastest, typically far
    /// from optimal.
    NorthWestCorner,
    /// Globally cheapest available cell.
    LeastCost,
    /// Maximum regret (penalty) line first. Typically closest to optimal.
    #[default]
    VogelApproximation,
}

impl fmt::Display for InitialBasisRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InitialBasisRule::NorthWestCorner => write!(f, "north-west corner"),
            InitialBasisRule::LeastCost => write!(f, "least-cost"),
            InitialBasisRule::VogelApproximation => write!(f, "Vogel approximation"),
        }
    }
}

/// Deciding which cell to make basic next.
///
/// The selection works on the disposable copy of the cost matrix in which retired lines have
/// been overwritten with [`Value::Infinity`]; a cell is available exactly when its cost is
/// finite. At least one available cell exists whenever a rule is called.
pub trait SelectionRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Select the next basic cell.
    fn select_cell(
        &mut self,
        costs: &DenseMatrix<Value<F>>,
        supply: &[F],
        demand: &[F],
    ) -> Coordinate;
}

/// The product of a construction heuristic.
#[derive(Debug)]
pub(crate) struct InitialAssignment<F> {
    /// The basic cells, in assignment order. Exactly `R + C - 1` of them.
    pub basis: Vec<Coordinate>,
    /// Shipped quantity per cell; zero outside the basic cells.
    pub assignment: DenseMatrix<F>,
}

/// Run the shared construction skeleton with the given selection rule.
///
/// Every iteration retires exactly one line, so after `R + C - 1` iterations one line remains
/// and all supply and demand has been assigned. Simultaneous exhaustion of a row and a column
/// (degeneracy) shows up as zero-quantity basic cells rather than as a short basic set.
pub(crate) fn construct<F: TransportNumber, R: SelectionRule<F>>(
    rule_name: InitialBasisRule,
    costs: &DenseMatrix<F>,
    supply: &[F],
    demand: &[F],
    observer: &mut dyn StepObserver<F>,
) -> InitialAssignment<F> {
    let mut rule = R::new();

    // The disposable working copies the heuristics consume.
    let mut working_costs = costs.clone().map(Value::Finite);
    let mut supply_left = supply.to_vec();
    let mut demand_left = demand.to_vec();

    let mut basis = Vec::with_capacity(costs.nr_rows() + costs.nr_columns() - 1);
    let mut assignment = DenseMatrix::constant(F::zero(), costs.nr_rows(), costs.nr_columns());

    for _ in 0..(costs.nr_rows() + costs.nr_columns() - 1) {
        let coordinate = rule.select_cell(&working_costs, &supply_left, &demand_left);
        debug_assert!(!working_costs.at(coordinate).is_infinite());

        let row_exhausts = supply_left[coordinate.row] < demand_left[coordinate.column];
        let quantity = if row_exhausts {
            supply_left[coordinate.row].clone()
        } else {
            demand_left[coordinate.column].clone()
        };

        assignment.set(coordinate.row, coordinate.column, quantity.clone());
        supply_left[coordinate.row] -= quantity.clone();
        demand_left[coordinate.column] -= quantity.clone();

        // Retire one line: the side with the smaller remaining quantity, ties the column.
        if row_exhausts {
            for column in 0..working_costs.nr_columns() {
                working_costs.set(coordinate.row, column, Value::Infinity);
            }
        } else {
            for row in 0..working_costs.nr_rows() {
                working_costs.set(row, coordinate.column, Value::Infinity);
            }
        }

        basis.push(coordinate);
        debug!("{} assigned {} at {}", rule_name, quantity, coordinate);
        observer.record(StepRecord::snapshot(
            format!("{} assignment", rule_name),
            costs,
            &basis,
            &assignment,
            None,
            None,
            None,
            None,
        ));
    }

    InitialAssignment { basis, assignment }
}

#[cfg(test)]
mod test {
    use num::rational::Ratio;

    use crate::algorithm::modi::initial::{
        construct, InitialBasisRule, LeastCost, NorthWestCorner, SelectionRule,
    };
    use crate::data::linear_algebra::Coordinate;
    use crate::data::linear_algebra::matrix::DenseMatrix;

    type T = Ratio<i64>;

    fn r(value: i64) -> T {
        Ratio::from_integer(value)
    }

    fn rv(values: Vec<i64>) -> Vec<T> {
        values.into_iter().map(r).collect()
    }

    fn rm(rows: Vec<Vec<i64>>) -> DenseMatrix<T> {
        DenseMatrix::from_rows(rows.into_iter().map(rv).collect())
    }

    /// The rows sum to supply and the columns to demand regardless of the rule.
    fn is_feasible(
        assignment: &DenseMatrix<T>,
        supply: &[T],
        demand: &[T],
    ) -> bool {
        (0..assignment.nr_rows()).all(|i| {
            assignment.row(i).cloned().sum::<T>() == supply[i]
        }) && (0..assignment.nr_columns()).all(|j| {
            assignment.column(j).cloned().sum::<T>() == demand[j]
        })
    }

    #[test]
    fn skeleton_produces_feasible_assignment() {
        let costs = rm(vec![vec![19, 30, 50, 10], vec![70, 30, 40, 60], vec![40, 8, 70, 20]]);
        let supply = rv(vec![7, 9, 18]);
        let demand = rv(vec![5, 8, 7, 14]);

        for run in 0..2 {
            let result = if run == 0 {
                construct::<T, NorthWestCorner>(
                    InitialBasisRule::NorthWestCorner, &costs, &supply, &demand, &mut (),
                )
            } else {
                construct::<T, LeastCost>(
                    InitialBasisRule::LeastCost, &costs, &supply, &demand, &mut (),
                )
            };

            assert_eq!(result.basis.len(), 3 + 4 - 1);
            assert!(is_feasible(&result.assignment, &supply, &demand));
        }
    }

    #[test]
    fn degenerate_instance_still_yields_full_basis() {
        // Supply 5 meets demand 5 head on, exhausting a row and a column at the same time.
        let costs = rm(vec![vec![1, 4], vec![3, 2]]);
        let supply = rv(vec![5, 5]);
        let demand = rv(vec![5, 5]);

        let result = construct::<T, NorthWestCorner>(
            InitialBasisRule::NorthWestCorner, &costs, &supply, &demand, &mut (),
        );

        assert_eq!(result.basis.len(), 3);
        assert!(is_feasible(&result.assignment, &supply, &demand));
        // The tie retires the column, so the zero-quantity cell sits in the surviving row.
        assert_eq!(result.basis, vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        ]);
        assert_eq!(*result.assignment.get(0, 1), r(0));
    }

    /// Rules only see availability through the infinity overwrites.
    #[test]
    fn retired_lines_are_invisible_to_rules() {
        struct FirstAvailable;
        impl SelectionRule<T> for FirstAvailable {
            fn new() -> Self {
                Self
            }

            fn select_cell(
                &mut self,
                costs: &DenseMatrix<crate::data::number_types::value::Value<T>>,
                _supply: &[T],
                _demand: &[T],
            ) -> Coordinate {
                costs.coordinates()
                    .find(|&c| !costs.at(c).is_infinite())
                    .expect("No available cell remains.")
            }
        }

        let costs = rm(vec![vec![1, 2], vec![3, 4]]);
        let supply = rv(vec![3, 3]);
        let demand = rv(vec![2, 4]);

        let result = construct::<T, FirstAvailable>(
            InitialBasisRule::NorthWestCorner, &costs, &supply, &demand, &mut (),
        );
        assert_eq!(result.basis, vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
        ]);
    }
}
