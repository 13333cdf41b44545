//! # The tableau
//!
//! Owns the full solver state: cost matrix, supply, demand, current assignment and basic-cell
//! set. Construction immediately builds an initial basic feasible solution with the chosen
//! heuristic; every [`Tableau::step`] call afterwards performs one MODI iteration until no
//! improving cell exists, after which the tableau is solved for good.
use log::debug;

use crate::algorithm::modi::{cycle, initial, pivot, potentials};
use crate::algorithm::modi::initial::{
    InitialBasisRule, LeastCost, NorthWestCorner, VogelApproximation,
};
use crate::algorithm::modi::record::{StepObserver, StepRecord};
use crate::algorithm::modi::{ConsistencyError, SolveError, StepOutcome};
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;
use crate::data::transport::model::TransportModel;
use crate::data::transport::solution::{Shipment, Solution};

/// Solver state for one transportation problem.
///
/// Not safe for concurrent mutation; callers racing multiple heuristics should construct one
/// tableau per (cloned) model.
#[derive(Debug)]
pub struct Tableau<F> {
    /// Original shipping costs. Immutable after construction.
    costs: DenseMatrix<F>,
    /// Original supply per source; the construction heuristic worked on a copy.
    supply: Vec<F>,
    /// Original demand per sink.
    demand: Vec<F>,
    row_names: Vec<String>,
    column_names: Vec<String>,
    /// Shipped quantity per cell; zero outside the basic cells.
    assignment: DenseMatrix<F>,
    /// Reduced costs of the most recent potential computation; `None` on basic cells.
    ///
    /// A separate grid: shipped quantities and optimality diagnostics never share storage.
    reduced_costs: DenseMatrix<Option<F>>,
    /// The basic cells. Exactly `R + C - 1` of them at all times.
    basis: Vec<Coordinate>,
    /// Flips to `true` exactly once; afterwards `step` is a no-op.
    solved: bool,
}

impl<F: TransportNumber> Tableau<F> {
    /// Construct a tableau and its initial basic feasible solution.
    ///
    /// # Errors
    ///
    /// `ConsistencyError::BasisSize` if the heuristic did not deliver `R + C - 1` basic cells.
    /// This cannot happen for a balanced model and indicates a bug rather than bad input.
    pub fn new(model: TransportModel<F>, rule: InitialBasisRule) -> Result<Self, ConsistencyError> {
        Self::new_with_observer(model, rule, &mut ())
    }

    /// Like [`Tableau::new`], with a record per heuristic assignment sent to the observer.
    pub fn new_with_observer(
        model: TransportModel<F>,
        rule: InitialBasisRule,
        observer: &mut dyn StepObserver<F>,
    ) -> Result<Self, ConsistencyError> {
        let (costs, supply, demand, row_names, column_names) = model.into_parts();

        debug!("constructing initial basis with the {} rule", rule);
        let built = match rule {
            InitialBasisRule::NorthWestCorner => initial::construct::<F, NorthWestCorner>(
                rule, &costs, &supply, &demand, observer,
            ),
            InitialBasisRule::LeastCost => initial::construct::<F, LeastCost>(
                rule, &costs, &supply, &demand, observer,
            ),
            InitialBasisRule::VogelApproximation => initial::construct::<F, VogelApproximation>(
                rule, &costs, &supply, &demand, observer,
            ),
        };

        let expected = costs.nr_rows() + costs.nr_columns() - 1;
        if built.basis.len() != expected {
            return Err(ConsistencyError::BasisSize { expected, found: built.basis.len() });
        }

        let reduced_costs = DenseMatrix::constant(None, costs.nr_rows(), costs.nr_columns());
        let tableau = Self {
            costs,
            supply,
            demand,
            row_names,
            column_names,
            assignment: built.assignment,
            reduced_costs,
            basis: built.basis,
            solved: false,
        };
        debug_assert!(tableau.is_consistent());

        Ok(tableau)
    }

    /// Perform one MODI iteration.
    ///
    /// Computes potentials and reduced costs; when an improving cell exists its loop is found
    /// and pivoted, otherwise the tableau flips to solved. Solved tableaus are left untouched.
    ///
    /// # Errors
    ///
    /// Any `ConsistencyError`; the state must be considered corrupt afterwards.
    pub fn step(&mut self) -> Result<StepOutcome<F>, ConsistencyError> {
        self.step_with_observer(&mut ())
    }

    /// Like [`Tableau::step`], emitting a record per phase to the observer.
    pub fn step_with_observer(
        &mut self,
        observer: &mut dyn StepObserver<F>,
    ) -> Result<StepOutcome<F>, ConsistencyError> {
        if self.solved {
            return Ok(StepOutcome::AlreadySolved);
        }

        let potentials = potentials::compute(&self.costs, &self.basis)?;
        self.reduced_costs = potentials::reduced_costs(&self.costs, &self.basis, &potentials);

        let Some((entering, gain)) = potentials::select_entering(&self.reduced_costs) else {
            self.solved = true;
            let objective = self.current_value();
            debug!("optimal, objective {}", objective);
            observer.record(StepRecord::snapshot(
                "optimal",
                &self.costs,
                &self.basis,
                &self.assignment,
                Some(&self.reduced_costs),
                None,
                None,
                Some((potentials.u, potentials.v)),
            ));
            return Ok(StepOutcome::Optimal(objective));
        };

        debug!("entering {} with reduced cost {}", entering, gain);
        observer.record(StepRecord::snapshot(
            "potentials",
            &self.costs,
            &self.basis,
            &self.assignment,
            Some(&self.reduced_costs),
            Some(entering),
            None,
            Some((potentials.u, potentials.v)),
        ));

        let cycle = cycle::find_cycle(entering, &self.basis)?;
        let pivot = pivot::apply(&cycle, &mut self.assignment, &mut self.basis);
        debug_assert!(self.is_consistent());

        debug!("pivoted {} in, {} out, theta {}", entering, pivot.leaving, pivot.theta);
        observer.record(StepRecord::snapshot(
            "pivot",
            &self.costs,
            &self.basis,
            &self.assignment,
            Some(&self.reduced_costs),
            Some(entering),
            Some(pivot.leaving),
            None,
        ));

        Ok(StepOutcome::Pivoted { entering, leaving: pivot.leaving, theta: pivot.theta })
    }

    /// Drive [`Tableau::step`] until optimality.
    ///
    /// # Errors
    ///
    /// A `ConsistencyError` from an iteration, or `SolveError::PivotLimit` after `R * C`
    /// pivots without optimality, which indicates degenerate cycling.
    pub fn solve(&mut self) -> Result<Solution<F>, SolveError> {
        self.solve_with_observer(&mut ())
    }

    /// Like [`Tableau::solve`], emitting records to the observer.
    pub fn solve_with_observer(
        &mut self,
        observer: &mut dyn StepObserver<F>,
    ) -> Result<Solution<F>, SolveError> {
        let limit = self.costs.nr_rows() * self.costs.nr_columns();

        for _ in 0..=limit {
            match self.step_with_observer(observer)? {
                StepOutcome::Pivoted { .. } => {}
                StepOutcome::Optimal(_) | StepOutcome::AlreadySolved => {
                    return Ok(self.solution());
                }
            }
        }

        Err(SolveError::PivotLimit(limit))
    }

    /// Whether no improving cell remained in a previous `step` call.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Objective value of the current, possibly non-optimal, basic assignment.
    pub fn current_value(&self) -> F {
        self.basis.iter().fold(F::zero(), |total, &coordinate| {
            total + self.assignment.at(coordinate).clone() * self.costs.at(coordinate).clone()
        })
    }

    /// The basic cells, in their current order.
    pub fn basis(&self) -> &[Coordinate] {
        &self.basis
    }

    /// Shipped quantity per cell.
    pub fn assignment(&self) -> &DenseMatrix<F> {
        &self.assignment
    }

    /// Reduced cost of a cell, as of the most recent potential computation.
    ///
    /// `None` for basic cells, and for every cell before the first `step` call.
    pub fn reduced_cost(&self, coordinate: Coordinate) -> Option<&F> {
        self.reduced_costs.at(coordinate).as_ref()
    }

    /// The current assignment as a named solution.
    fn solution(&self) -> Solution<F> {
        let shipments = self.basis.iter()
            .map(|&coordinate| Shipment {
                from: self.row_names[coordinate.row].clone(),
                to: self.column_names[coordinate.column].clone(),
                quantity: self.assignment.at(coordinate).clone(),
            })
            .collect();

        Solution::new(self.current_value(), shipments)
    }

    /// Whether the state satisfies the invariants every iteration must preserve: full basis,
    /// rows summing to supply, columns summing to demand.
    fn is_consistent(&self) -> bool {
        if self.basis.len() != self.costs.nr_rows() + self.costs.nr_columns() - 1 {
            return false;
        }

        let rows_match = (0..self.costs.nr_rows()).all(|row| {
            self.assignment.row(row).cloned().fold(F::zero(), |total, value| total + value)
                == self.supply[row]
        });
        let columns_match = (0..self.costs.nr_columns()).all(|column| {
            self.assignment.column(column).cloned().fold(F::zero(), |total, value| total + value)
                == self.demand[column]
        });

        rows_match && columns_match
    }
}
