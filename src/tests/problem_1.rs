//! # A 3x4 textbook instance
//!
//! Three sources, four sinks, optimum 743. Large enough that the three construction rules all
//! start from different corners of the feasible region, which makes it a good instance to pin
//! down their exact behavior.
use crate::algorithm::modi::{InitialBasisRule, Tableau};
use crate::data::linear_algebra::Coordinate;
use crate::tests::{model_3x4, r};

#[test]
fn north_west_corner_start() {
    let tableau = Tableau::new(model_3x4(), InitialBasisRule::NorthWestCorner).unwrap();

    assert_eq!(tableau.basis(), [
        Coordinate::new(0, 0),
        Coordinate::new(0, 1),
        Coordinate::new(1, 1),
        Coordinate::new(1, 2),
        Coordinate::new(2, 2),
        Coordinate::new(2, 3),
    ]);
    assert_eq!(*tableau.assignment().get(0, 0), r(5));
    assert_eq!(*tableau.assignment().get(2, 3), r(14));
    assert_eq!(tableau.current_value(), r(1015));
}

#[test]
fn least_cost_start() {
    let tableau = Tableau::new(model_3x4(), InitialBasisRule::LeastCost).unwrap();

    // The cheapest cell comes first: 8 units of demand at cost 8.
    assert_eq!(tableau.basis()[0], Coordinate::new(2, 1));
    assert_eq!(*tableau.assignment().get(2, 1), r(8));
    assert_eq!(tableau.current_value(), r(814));
}

#[test]
fn vogel_start_is_closest_to_optimal() {
    let tableau = Tableau::new(model_3x4(), InitialBasisRule::VogelApproximation).unwrap();

    // Column 1 has the largest penalty (30 - 8 = 22) and is served first.
    assert_eq!(tableau.basis()[0], Coordinate::new(2, 1));
    assert_eq!(tableau.current_value(), r(779));
}

#[test]
fn start_quality_ordering() {
    let objective = |rule| {
        Tableau::new(model_3x4(), rule).unwrap().current_value()
    };

    let north_west = objective(InitialBasisRule::NorthWestCorner);
    let least_cost = objective(InitialBasisRule::LeastCost);
    let vogel = objective(InitialBasisRule::VogelApproximation);

    assert!(vogel < least_cost);
    assert!(least_cost < north_west);
    assert!(r(743) <= vogel);
}

#[test]
fn every_start_converges_to_743() {
    for rule in [
        InitialBasisRule::NorthWestCorner,
        InitialBasisRule::LeastCost,
        InitialBasisRule::VogelApproximation,
    ] {
        let mut tableau = Tableau::new(model_3x4(), rule).unwrap();
        let solution = tableau.solve().unwrap();

        assert_eq!(*solution.objective_value(), r(743), "rule: {}", rule);

        // All non-basic reduced costs are non-positive at the optimum.
        for coordinate in tableau.assignment().coordinates() {
            if let Some(reduced) = tableau.reduced_cost(coordinate) {
                assert!(reduced <= &r(0), "cell {} improves after solve", coordinate);
            }
        }
    }
}
