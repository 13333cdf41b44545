//! # The problem description
//!
//! A validated transportation problem: a cost matrix with one row per source and one column per
//! sink, a supply quantity per source and a demand quantity per sink. Totals must balance;
//! whether an unbalanced input is rejected or patched with a dummy line is a policy decision
//! made by the caller, never silently.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;
use crate::data::transport::error::ModelError;

/// What to do when total supply and total demand differ.
///
/// Resolves, explicitly, a question the algorithm itself cannot answer: an unbalanced problem
/// has no feasible assignment, so either the input is wrong (`Reject`) or the model should be
/// extended with a virtual source or sink absorbing the difference (`ExtendWithDummy`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum BalancePolicy {
    /// Fail construction with [`ModelError::Unbalanced`].
    #[default]
    Reject,
    /// Append a zero-cost dummy row (excess demand) or column (excess supply).
    ExtendWithDummy,
}

/// A validated, balanced transportation problem.
///
/// Construction is the only place where validation happens; every instance of this type
/// describes a solvable problem. The solver consumes a model by value; callers racing several
/// heuristics should clone the model per tableau.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportModel<F> {
    /// Per-cell shipping costs, row per source, column per sink. Immutable after construction.
    costs: DenseMatrix<F>,
    /// Quantity available at each source.
    supply: Vec<F>,
    /// Quantity required at each sink.
    demand: Vec<F>,
    /// One name per source, for reporting.
    row_names: Vec<String>,
    /// One name per sink, for reporting.
    column_names: Vec<String>,
}

impl<F: TransportNumber> TransportModel<F> {
    /// Create a model with generated names.
    ///
    /// # Arguments
    ///
    /// * `costs`: Cost rows; all rows must have equal length.
    /// * `supply`: One quantity per cost row.
    /// * `demand`: One quantity per cost column.
    /// * `policy`: How to treat unbalanced totals.
    ///
    /// # Errors
    ///
    /// A `ModelError` describing the first validation rule the input violates.
    pub fn new(
        costs: Vec<Vec<F>>,
        supply: Vec<F>,
        demand: Vec<F>,
        policy: BalancePolicy,
    ) -> Result<Self, ModelError> {
        let row_names = (0..supply.len()).map(|i| format!("s{}", i)).collect();
        let column_names = (0..demand.len()).map(|j| format!("d{}", j)).collect();

        Self::with_names(costs, supply, demand, row_names, column_names, policy)
    }

    /// Create a model with caller-provided source and sink names.
    ///
    /// # Errors
    ///
    /// A `ModelError` describing the first validation rule the input violates.
    pub fn with_names(
        costs: Vec<Vec<F>>,
        supply: Vec<F>,
        demand: Vec<F>,
        row_names: Vec<String>,
        column_names: Vec<String>,
        policy: BalancePolicy,
    ) -> Result<Self, ModelError> {
        let nr_columns = costs.first().map_or(0, Vec::len);
        if costs.is_empty() || nr_columns == 0 {
            return Err(ModelError::Empty);
        }
        if let Some(row) = costs.iter().position(|cells| cells.len() != nr_columns) {
            return Err(ModelError::RaggedCosts {
                row,
                expected: nr_columns,
                found: costs[row].len(),
            });
        }

        let costs = DenseMatrix::from_rows(costs);
        if supply.len() != costs.nr_rows() {
            return Err(ModelError::DimensionMismatch {
                quantity: "supply",
                expected: costs.nr_rows(),
                found: supply.len(),
            });
        }
        if demand.len() != costs.nr_columns() {
            return Err(ModelError::DimensionMismatch {
                quantity: "demand",
                expected: costs.nr_columns(),
                found: demand.len(),
            });
        }
        if row_names.len() != costs.nr_rows() {
            return Err(ModelError::NameMismatch {
                axis: "row",
                expected: costs.nr_rows(),
                found: row_names.len(),
            });
        }
        if column_names.len() != costs.nr_columns() {
            return Err(ModelError::NameMismatch {
                axis: "column",
                expected: costs.nr_columns(),
                found: column_names.len(),
            });
        }
        for (quantity, values) in [("supply", &supply), ("demand", &demand)] {
            if let Some(index) = values.iter().position(|value| value < &F::zero()) {
                return Err(ModelError::Negative { quantity, index });
            }
        }

        let mut model = Self { costs, supply, demand, row_names, column_names };
        model.balance(policy)?;

        Ok(model)
    }

    /// Compare the totals and, depending on policy, reject or extend the model.
    fn balance(&mut self, policy: BalancePolicy) -> Result<(), ModelError> {
        let total_supply = self.supply.iter().fold(F::zero(), |total, value| total + value.clone());
        let total_demand = self.demand.iter().fold(F::zero(), |total, value| total + value.clone());

        if total_supply == total_demand {
            return Ok(());
        }

        match policy {
            BalancePolicy::Reject => Err(ModelError::Unbalanced {
                total_supply: total_supply.to_string(),
                total_demand: total_demand.to_string(),
            }),
            BalancePolicy::ExtendWithDummy => {
                if total_supply > total_demand {
                    // A virtual sink absorbs the surplus at zero cost.
                    let mut rows = Vec::with_capacity(self.nr_rows());
                    for row in 0..self.nr_rows() {
                        let mut cells: Vec<F> = self.costs.row(row).cloned().collect();
                        cells.push(F::zero());
                        rows.push(cells);
                    }
                    self.costs = DenseMatrix::from_rows(rows);
                    self.demand.push(total_supply - total_demand);
                    self.column_names.push("dummy".to_string());
                } else {
                    // A virtual source covers the shortfall at zero cost.
                    let mut rows: Vec<Vec<F>> = (0..self.nr_rows())
                        .map(|row| self.costs.row(row).cloned().collect())
                        .collect();
                    rows.push(vec![F::zero(); self.nr_columns()]);
                    self.costs = DenseMatrix::from_rows(rows);
                    self.supply.push(total_demand - total_supply);
                    self.row_names.push("dummy".to_string());
                }

                Ok(())
            }
        }
    }

    /// Number of sources.
    pub fn nr_rows(&self) -> usize {
        self.costs.nr_rows()
    }

    /// Number of sinks.
    pub fn nr_columns(&self) -> usize {
        self.costs.nr_columns()
    }

    /// The cost matrix.
    pub fn costs(&self) -> &DenseMatrix<F> {
        &self.costs
    }

    /// Supply per source.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// Demand per sink.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// Name of a source.
    pub fn row_name(&self, row: usize) -> &str {
        &self.row_names[row]
    }

    /// Name of a sink.
    pub fn column_name(&self, column: usize) -> &str {
        &self.column_names[column]
    }

    /// Decompose into the parts the tableau takes ownership of.
    pub(crate) fn into_parts(self) -> (DenseMatrix<F>, Vec<F>, Vec<F>, Vec<String>, Vec<String>) {
        (self.costs, self.supply, self.demand, self.row_names, self.column_names)
    }
}
