//! # Integration tests that require a look inside the crate.
//!
//! Shared fixture builders live here; the `problem_*` modules each work one instance through
//! the full pipeline, from raw input to the optimality certificate.
pub mod problem_1;
pub mod problem_2;

use num::rational::Ratio;

use crate::algorithm::modi::{InitialBasisRule, Tableau};
use crate::data::transport::model::{BalancePolicy, TransportModel};

pub type T = Ratio<i64>;

pub fn r(value: i64) -> T {
    Ratio::from_integer(value)
}

pub fn rv(values: Vec<i64>) -> Vec<T> {
    values.into_iter().map(r).collect()
}

/// A 2x2 instance whose north-west corner solution happens to be optimal already.
pub fn model_2x2() -> TransportModel<T> {
    TransportModel::new(
        vec![rv(vec![4, 6]), rv(vec![5, 3])],
        rv(vec![30, 40]),
        rv(vec![20, 50]),
        BalancePolicy::Reject,
    ).unwrap()
}

/// The 3x4 textbook instance with north-west corner objective 1015 and optimum 743.
pub fn model_3x4() -> TransportModel<T> {
    TransportModel::new(
        vec![
            rv(vec![19, 30, 50, 10]),
            rv(vec![70, 30, 40, 60]),
            rv(vec![40, 8, 70, 20]),
        ],
        rv(vec![7, 9, 18]),
        rv(vec![5, 8, 7, 14]),
        BalancePolicy::Reject,
    ).unwrap()
}

#[test]
fn test_full_pipeline() {
    let mut tableau = Tableau::new(model_3x4(), InitialBasisRule::default()).unwrap();
    let solution = tableau.solve().unwrap();

    assert_eq!(*solution.objective_value(), r(743));
    assert!(tableau.is_solved());

    // The shipments recombine into the objective value.
    let model = model_3x4();
    let recombined: T = solution.shipments().iter()
        .map(|shipment| {
            let row = shipment.from.trim_start_matches('s').parse::<usize>().unwrap();
            let column = shipment.to.trim_start_matches('d').parse::<usize>().unwrap();
            shipment.quantity.clone() * model.costs().get(row, column).clone()
        })
        .sum();
    assert_eq!(recombined, r(743));
}
