//! # Vogel's Approximation
//!
//! For every available row and column, the penalty (or regret) is the difference between its
//! two cheapest available cells: the price of not using that line's best cell now. The line
//! with the largest penalty is served first, at its cheapest cell. The extra bookkeeping
//! typically yields a starting solution far closer to optimal than the other rules.
use itertools::Itertools;

use crate::algorithm::modi::initial::least_cost::cheapest_available;
use crate::algorithm::modi::initial::SelectionRule;
use crate::data::linear_algebra::Coordinate;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::traits::TransportNumber;
use crate::data::number_types::value::Value;

/// Selects the cheapest cell of the maximum-penalty line.
///
/// Maximum-penalty ties prefer a column over a row: columns are scanned first and a candidate
/// is only displaced by a strictly greater penalty. Lines with a single available cell have no
/// penalty and are excluded; when no line has a penalty left, the rule falls back to the
/// globally cheapest available cell.
pub struct VogelApproximation;

impl<F: TransportNumber> SelectionRule<F> for VogelApproximation {
    fn new() -> Self {
        Self
    }

    fn select_cell(
        &mut self,
        costs: &DenseMatrix<Value<F>>,
        _supply: &[F],
        _demand: &[F],
    ) -> Coordinate {
        match select_line(costs) {
            Some(Line::Column(column)) => {
                let row = costs.column(column)
                    .position_min_by(|a, b| a.cmp_known(b))
                    .expect("A selected line is never empty.");
                Coordinate::new(row, column)
            }
            Some(Line::Row(row)) => {
                let column = costs.row(row)
                    .position_min_by(|a, b| a.cmp_known(b))
                    .expect("A selected line is never empty.");
                Coordinate::new(row, column)
            }
            None => cheapest_available(costs),
        }
    }
}

/// A row or a column of the grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Line {
    Row(usize),
    Column(usize),
}

/// The line with the maximum penalty, or `None` when no line has two available cells left.
pub(super) fn select_line<F: TransportNumber>(
    costs: &DenseMatrix<Value<F>>,
) -> Option<Line> {
    let mut best: Option<(Line, F)> = None;

    // Columns before rows: an equal penalty never displaces the incumbent, so a column wins
    // any tie with a row.
    let columns = (0..costs.nr_columns())
        .map(|column| (Line::Column(column), penalty(costs.column(column))));
    let rows = (0..costs.nr_rows())
        .map(|row| (Line::Row(row), penalty(costs.row(row))));

    for (line, penalty) in columns.chain(rows) {
        let Some(penalty) = penalty else { continue };

        match &best {
            Some((_, incumbent)) if &penalty <= incumbent => {}
            _ => best = Some((line, penalty)),
        }
    }

    best.map(|(line, _)| line)
}

/// Difference between the two cheapest available cells of a line.
///
/// `None` when fewer than two cells are available: a single remaining cell would make the
/// penalty infinite, which is exactly the case excluded from the max-comparison.
fn penalty<'a, F: TransportNumber + 'a>(
    cells: impl Iterator<Item = &'a Value<F>>,
) -> Option<F> {
    let mut smallest: Option<&F> = None;
    let mut second: Option<&F> = None;

    for cell in cells {
        let Some(cost) = cell.finite() else { continue };

        match smallest {
            Some(current) if cost < current => {
                second = smallest;
                smallest = Some(cost);
            }
            Some(_) => match second {
                Some(current) if current <= cost => {}
                _ => second = Some(cost),
            },
            None => smallest = Some(cost),
        }
    }

    match (smallest, second) {
        (Some(smallest), Some(second)) => Some(second.clone() - smallest.clone()),
        _ => None,
    }
}
