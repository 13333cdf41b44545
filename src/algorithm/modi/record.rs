//! # Step records
//!
//! After each meaningful phase (a heuristic assignment, a potential computation, a pivot, the
//! final solve) the engine emits one record: a human-readable phase label and a structured
//! snapshot of the full grid. The engine only produces these facts; rendering them to any
//! presentation format is a collaborator's responsibility.
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;

/// Role of a cell in the pivot currently being prepared or applied.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CellRole {
    /// The cell entering the basic set.
    Entering,
    /// The cell leaving the basic set.
    Leaving,
}

/// Everything known about one cell at the moment a record was taken.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CellSnapshot<F> {
    /// Original shipping cost of the cell.
    pub cost: F,
    /// Whether the cell is currently basic.
    pub basic: bool,
    /// Shipped quantity, for basic cells.
    pub assignment: Option<F>,
    /// Reduced cost, for non-basic cells during and after a potential computation.
    pub reduced_cost: Option<F>,
    /// Entering/leaving marker, if the cell plays a role in the current pivot.
    pub role: Option<CellRole>,
}

/// One phase of the computation, snapshotted for external rendering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepRecord<F> {
    /// Human-readable phase label, such as `pivot` or `least-cost assignment`.
    pub label: String,
    /// Snapshot of every cell of the grid.
    pub cells: DenseMatrix<CellSnapshot<F>>,
    /// Row and column potentials (the dual multipliers), when the phase computed them.
    pub potentials: Option<(Vec<F>, Vec<F>)>,
}

impl<F: TransportNumber> StepRecord<F> {
    /// Snapshot the current state of the grid.
    pub(crate) fn snapshot(
        label: impl Into<String>,
        costs: &DenseMatrix<F>,
        basis: &[Coordinate],
        assignment: &DenseMatrix<F>,
        reduced_costs: Option<&DenseMatrix<Option<F>>>,
        entering: Option<Coordinate>,
        leaving: Option<Coordinate>,
        potentials: Option<(Vec<F>, Vec<F>)>,
    ) -> Self {
        let cells = DenseMatrix::from_fn(costs.nr_rows(), costs.nr_columns(), |row, column| {
            let coordinate = Coordinate::new(row, column);
            let basic = basis.contains(&coordinate);

            let role = if entering == Some(coordinate) {
                Some(CellRole::Entering)
            } else if leaving == Some(coordinate) {
                Some(CellRole::Leaving)
            } else {
                None
            };

            CellSnapshot {
                cost: costs.at(coordinate).clone(),
                basic,
                assignment: basic.then(|| assignment.at(coordinate).clone()),
                reduced_cost: reduced_costs.and_then(|grid| grid.at(coordinate).clone()),
                role,
            }
        });

        Self { label: label.into(), cells, potentials }
    }
}

/// Receives one record per phase.
///
/// The unit type is the no-op observer for callers that don't care about intermediate states.
pub trait StepObserver<F> {
    /// Take ownership of a freshly taken record.
    fn record(&mut self, record: StepRecord<F>);
}

impl<F> StepObserver<F> for () {
    fn record(&mut self, _record: StepRecord<F>) {
    }
}

/// An observer that simply keeps every record, in order.
#[derive(Debug)]
pub struct TraceRecorder<F> {
    records: Vec<StepRecord<F>>,
}

impl<F> TraceRecorder<F> {
    /// An empty trace.
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// All records received so far, in emission order.
    pub fn records(&self) -> &[StepRecord<F>] {
        &self.records
    }
}

impl<F> Default for TraceRecorder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> StepObserver<F> for TraceRecorder<F> {
    fn record(&mut self, record: StepRecord<F>) {
        self.records.push(record);
    }
}
