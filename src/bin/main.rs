use std::path::Path;
use std::process::exit;

use clap::{Parser, ValueEnum};
use num::rational::Ratio;

use modi_transport::algorithm::modi::{InitialBasisRule, Tableau};
use modi_transport::algorithm::modi::record::{CellRole, StepRecord, TraceRecorder};
use modi_transport::data::transport::model::BalancePolicy;
use modi_transport::io::import;

type Number = Ratio<i64>;

/// A transportation problem solver written in rust.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    problem_file: String,
    /// Heuristic constructing the initial basic feasible solution
    #[arg(long, value_enum, default_value_t = Rule::Vogel)]
    rule: Rule,
    /// Balance an unbalanced problem with a zero-cost dummy source or sink
    #[arg(long)]
    dummy: bool,
    /// Print the grid after every phase of the computation
    #[arg(long)]
    trace: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    NorthWest,
    LeastCost,
    Vogel,
}

impl From<Rule> for InitialBasisRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::NorthWest => InitialBasisRule::NorthWestCorner,
            Rule::LeastCost => InitialBasisRule::LeastCost,
            Rule::Vogel => InitialBasisRule::VogelApproximation,
        }
    }
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let path = Path::new(&opts.problem_file);
    println!("Reading problem file: \"{}\"...", path.to_string_lossy());

    let policy = if opts.dummy {
        BalancePolicy::ExtendWithDummy
    } else {
        BalancePolicy::Reject
    };
    let (model, known_objective) = match import::<Number>(path, policy) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("Couldn't read the problem: {}", error);
            exit(1);
        }
    };

    let mut recorder = TraceRecorder::new();
    let solution = {
        let mut tableau = match Tableau::new_with_observer(
            model, opts.rule.into(), &mut recorder,
        ) {
            Ok(tableau) => tableau,
            Err(error) => {
                eprintln!("Couldn't construct a starting solution: {}", error);
                exit(1);
            }
        };

        match tableau.solve_with_observer(&mut recorder) {
            Ok(solution) => solution,
            Err(error) => {
                eprintln!("Couldn't solve the problem: {}", error);
                exit(1);
            }
        }
    };

    if opts.trace {
        for record in recorder.records() {
            render(record);
        }
    }

    println!("Solution computed:");
    println!("{}", solution);

    if let Some(expected) = known_objective {
        if solution.objective_value() == &expected {
            println!("Matches the known optimal objective value.");
        } else {
            eprintln!(
                "Objective value {} differs from the known optimal {}.",
                solution.objective_value(), expected,
            );
            exit(1);
        }
    }
}

/// Print one phase of the computation as a grid.
///
/// Basic cells show their shipped quantity, non-basic cells their reduced cost in brackets
/// when one is known. The entering and leaving cells are marked with `+` and `-`.
fn render(record: &StepRecord<Number>) {
    println!("[{}]", record.label);

    for row in 0..record.cells.nr_rows() {
        let line = (0..record.cells.nr_columns())
            .map(|column| {
                let cell = record.cells.get(row, column);
                let marker = match cell.role {
                    Some(CellRole::Entering) => "+",
                    Some(CellRole::Leaving) => "-",
                    None => "",
                };
                match (&cell.assignment, &cell.reduced_cost) {
                    (Some(quantity), _) => format!("{}{}", quantity, marker),
                    (None, Some(reduced)) => format!("[{}]{}", reduced, marker),
                    (None, None) => format!(".{}", marker),
                }
            })
            .collect::<Vec<_>>()
            .join("\t");
        println!("{}", line);
    }

    if let Some((u, v)) = &record.potentials {
        let format = |values: &[Number]| {
            values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        };
        println!("u: [{}]  v: [{}]", format(u), format(v));
    }
    println!();
}
