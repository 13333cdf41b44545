//! # Small and degenerate instances
//!
//! A 2x2 instance whose north-west corner start is already optimal, and instances where supply
//! and demand exhaust simultaneously, forcing zero-quantity basic cells through the pivots.
use crate::algorithm::modi::{InitialBasisRule, StepOutcome, Tableau};
use crate::algorithm::modi::record::TraceRecorder;
use crate::data::linear_algebra::Coordinate;
use crate::data::transport::model::{BalancePolicy, TransportModel};
use crate::tests::{model_2x2, r, rv, T};

#[test]
fn already_optimal_start_certifies_in_one_step() {
    let mut tableau = Tableau::new(model_2x2(), InitialBasisRule::NorthWestCorner).unwrap();
    assert_eq!(tableau.current_value(), r(260));

    // The first step finds no improving cell and certifies the start.
    assert_eq!(tableau.step().unwrap(), StepOutcome::Optimal(r(260)));
    assert_eq!(tableau.reduced_cost(Coordinate::new(1, 0)), Some(&r(-4)));
}

#[test]
fn degenerate_pivots_terminate() {
    // Each source has exactly one cheap sink, shifted off the diagonal, so the north-west
    // corner start is maximally wrong and every basis along the way carries zero cells.
    let model = TransportModel::<T>::new(
        vec![
            rv(vec![9, 2, 9]),
            rv(vec![9, 9, 2]),
            rv(vec![2, 9, 9]),
        ],
        rv(vec![10, 10, 10]),
        rv(vec![10, 10, 10]),
        BalancePolicy::Reject,
    ).unwrap();

    let mut tableau = Tableau::new(model, InitialBasisRule::NorthWestCorner).unwrap();
    assert_eq!(tableau.current_value(), r(270));

    let mut pivots = 0;
    let mut degenerate = 0;
    loop {
        match tableau.step().unwrap() {
            StepOutcome::Pivoted { theta, .. } => {
                pivots += 1;
                if theta == r(0) {
                    degenerate += 1;
                }
            }
            StepOutcome::Optimal(objective) => {
                assert_eq!(objective, r(60));
                break;
            }
            StepOutcome::AlreadySolved => unreachable!(),
        }
        assert!(pivots <= 3 * 3, "cycling");
    }

    // The second pivot merely swaps a zero-quantity cell into the basis.
    assert!(pivots >= 2);
    assert!(degenerate >= 1);
    assert_eq!(tableau.basis().len(), 3 + 3 - 1);
}

#[test]
fn degenerate_start_has_zero_quantity_basic_cells() {
    let model = TransportModel::<T>::new(
        vec![rv(vec![1, 4]), rv(vec![3, 2])],
        rv(vec![5, 5]),
        rv(vec![5, 5]),
        BalancePolicy::Reject,
    ).unwrap();

    let tableau = Tableau::new(model, InitialBasisRule::NorthWestCorner).unwrap();

    assert_eq!(tableau.basis().len(), 3);
    assert_eq!(*tableau.assignment().get(0, 1), r(0));
    assert!(tableau.basis().contains(&Coordinate::new(0, 1)));
}

#[test]
fn trace_of_an_immediately_optimal_instance() {
    let mut recorder = TraceRecorder::new();
    let mut tableau = Tableau::new_with_observer(
        model_2x2(), InitialBasisRule::NorthWestCorner, &mut recorder,
    ).unwrap();
    tableau.solve_with_observer(&mut recorder).unwrap();

    // Three heuristic assignments and the final record; no pivot ever happened.
    let labels = recorder.records().iter()
        .map(|record| record.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, [
        "north-west corner assignment",
        "north-west corner assignment",
        "north-west corner assignment",
        "optimal",
    ]);

    let last = recorder.records().last().unwrap();
    let (u, v) = last.potentials.as_ref().unwrap();
    assert_eq!(u, &rv(vec![0, -3]));
    assert_eq!(v, &rv(vec![-4, -6]));

    // Basic cells carry their quantity, the non-basic cell its reduced cost.
    assert_eq!(last.cells.get(0, 0).assignment, Some(r(20)));
    assert_eq!(last.cells.get(1, 0).reduced_cost, Some(r(-4)));
}
