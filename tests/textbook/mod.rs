//! # Textbook instances
//!
//! Small problem files with a known optimal objective value, stored next to this module.
use std::path::{Path, PathBuf};

use num::rational::Ratio;

use modi_transport::algorithm::modi::{InitialBasisRule, Tableau};
use modi_transport::data::transport::model::BalancePolicy;
use modi_transport::io::error::ImportError;
use modi_transport::io::import;

type T = Ratio<i64>;

/// Compute the path of the problem file, based on the problem name.
///
/// The path is relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    Path::new(file!()).parent().unwrap().join(name).with_extension("tp")
}

/// Solve a problem file with every construction rule and compare against its known optimum.
fn solve_and_compare(name: &str) {
    let path = get_test_file_path(name);

    for rule in [
        InitialBasisRule::NorthWestCorner,
        InitialBasisRule::LeastCost,
        InitialBasisRule::VogelApproximation,
    ] {
        let (model, known) = import::<T>(&path, BalancePolicy::Reject).unwrap();
        let expected = known.expect("Test files carry their optimal objective value.");

        let mut tableau = Tableau::new(model, rule).unwrap();
        let solution = tableau.solve().unwrap();

        assert_eq!(*solution.objective_value(), expected, "{} with {}", name, rule);
    }
}

#[test]
fn problem_2x2() {
    solve_and_compare("problem_2x2");
}

#[test]
fn problem_3x4() {
    solve_and_compare("problem_3x4");
}

#[test]
fn unbalanced_is_rejected_without_a_dummy() {
    let path = get_test_file_path("unbalanced");
    let result = import::<T>(&path, BalancePolicy::Reject);
    assert!(matches!(result, Err(ImportError::Model(_))));
}

#[test]
fn unbalanced_solves_with_a_dummy() {
    let path = get_test_file_path("unbalanced");
    let (model, _) = import::<T>(&path, BalancePolicy::ExtendWithDummy).unwrap();

    let mut tableau = Tableau::new(model, InitialBasisRule::default()).unwrap();
    let solution = tableau.solve().unwrap();

    // Demand 8 at cost 3, demand 7 split over costs 1 and 2 as supply allows, surplus 5 free.
    assert_eq!(*solution.objective_value(), Ratio::from_integer(8 * 3 + 2 * 1 + 5 * 2));

    let to_dummy: T = solution.shipments().iter()
        .filter(|shipment| shipment.to == "dummy")
        .map(|shipment| shipment.quantity.clone())
        .sum();
    assert_eq!(to_dummy, Ratio::from_integer(5));
}
