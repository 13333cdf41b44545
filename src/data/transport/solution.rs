//! # Representation of solved problems
//!
//! Once a transportation problem is fully solved, a solution is derived: the minimum total cost
//! and the shipped quantity for every basic cell. This struct would typically be used to print
//! the optimal shipping plan for the user.
use std::fmt;

use crate::data::number_types::traits::TransportNumber;

/// One shipped quantity in a solution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shipment<F> {
    /// Name of the source the quantity leaves from.
    pub from: String,
    /// Name of the sink the quantity arrives at.
    pub to: String,
    /// Shipped quantity. Can be zero for degenerate basic cells.
    pub quantity: F,
}

/// A full solution to a transportation problem.
///
/// Only basic cells appear; every other cell ships nothing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution<F> {
    /// Total cost of the shipping plan.
    objective_value: F,
    /// Shipments in basic-cell order.
    shipments: Vec<Shipment<F>>,
}

impl<F: TransportNumber> Solution<F> {
    /// A plain constructor.
    pub fn new(objective_value: F, shipments: Vec<Shipment<F>>) -> Self {
        Self { objective_value, shipments }
    }

    /// Total cost of the shipping plan.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Shipments in basic-cell order.
    pub fn shipments(&self) -> &[Shipment<F>] {
        &self.shipments
    }
}

impl<F: TransportNumber> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "total cost: {}", self.objective_value)?;
        for shipment in &self.shipments {
            writeln!(f, "{} -> {}: {}", shipment.from, shipment.to, shipment.quantity)?;
        }

        Ok(())
    }
}
