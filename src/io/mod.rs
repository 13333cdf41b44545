//! # Reading of transportation problems
//!
//! This module provides read functionality for a plain-text problem format:
//!
//! ```text
//! # anything after a hash is a comment
//! 3 4            <- number of sources, number of sinks
//! 19 30 50 10    <- one cost row per source
//! 70 30 40 60
//! 40 8 70 20
//! 7 9 18         <- supply per source
//! 5 8 7 14       <- demand per sink
//! out 743        <- optional known optimal objective value
//! ```
//!
//! Blank lines are ignored. All quantities are parsed with the number type's `FromStr`, so a
//! rational instantiation accepts fractions such as `1/3`.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::data::number_types::traits::TransportNumber;
use crate::data::transport::model::{BalancePolicy, TransportModel};
use crate::io::error::{ImportError, ParseError};

pub mod error;

/// Import a problem from a file.
///
/// # Arguments
///
/// * `file_path`: Path of a `.tp` or `.txt` file in the format described at the module level.
/// * `policy`: How to treat unbalanced totals.
///
/// # Errors
///
/// When a file extension is unknown, the file cannot be read, its contents don't parse, or the
/// parsed quantities don't describe a valid problem.
pub fn import<F>(
    file_path: &Path,
    policy: BalancePolicy,
) -> Result<(TransportModel<F>, Option<F>), ImportError>
where
    F: TransportNumber + FromStr,
{
    match file_path.extension().and_then(|extension| extension.to_str()) {
        Some("tp" | "txt") => {}
        _ => return Err(ImportError::FileExtension(format!(
            "Could not recognise the file extension of file: {:?}", file_path,
        ))),
    }

    let mut text = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut text)
        .map_err(ImportError::IO)?;

    parse(&text, policy)
}

/// Parse a problem from text in the format described at the module level.
///
/// Returns the model together with the known optimal objective value, if an `out` line was
/// present.
///
/// # Errors
///
/// A `Parse` error for syntactically incorrect text, a `Model` error when the quantities don't
/// describe a valid problem under the policy.
pub fn parse<F>(
    text: &str,
    policy: BalancePolicy,
) -> Result<(TransportModel<F>, Option<F>), ImportError>
where
    F: TransportNumber + FromStr,
{
    let mut lines = text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|&(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (number, line) = lines.next()
        .ok_or_else(|| ParseError::new("Empty problem description"))?;
    let dimensions = values::<usize>(line, number, 2)?;
    let (nr_rows, nr_columns) = (dimensions[0], dimensions[1]);

    let mut costs = Vec::with_capacity(nr_rows);
    for _ in 0..nr_rows {
        let (number, line) = lines.next()
            .ok_or_else(|| ParseError::new("Missing cost row"))?;
        costs.push(values::<F>(line, number, nr_columns)?);
    }

    let (number, line) = lines.next()
        .ok_or_else(|| ParseError::new("Missing supply line"))?;
    let supply = values::<F>(line, number, nr_rows)?;

    let (number, line) = lines.next()
        .ok_or_else(|| ParseError::new("Missing demand line"))?;
    let demand = values::<F>(line, number, nr_columns)?;

    let known_objective = match lines.next() {
        None => None,
        Some((number, line)) => match line.strip_prefix("out") {
            Some(rest) => Some(single::<F>(rest.trim(), number, line)?),
            None => return Err(ParseError::at_line(
                "Unexpected trailing line", number, line,
            ).into()),
        },
    };
    if let Some((number, line)) = lines.next() {
        return Err(ParseError::at_line("Unexpected trailing line", number, line).into());
    }

    let model = TransportModel::new(costs, supply, demand, policy)?;

    Ok((model, known_objective))
}

/// Parse a line into exactly `expected` whitespace-separated values.
fn values<F: FromStr>(
    line: &str,
    number: usize,
    expected: usize,
) -> Result<Vec<F>, ParseError> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    if fields.len() != expected {
        return Err(ParseError::at_line(
            format!("Expected {} values, found {}", expected, fields.len()),
            number,
            line,
        ));
    }

    fields.into_iter()
        .map(|field| single(field, number, line))
        .collect()
}

fn single<F: FromStr>(field: &str, number: usize, line: &str) -> Result<F, ParseError> {
    field.parse().map_err(|_| ParseError::at_line(
        format!("Could not parse \"{}\" as a number", field),
        number,
        line,
    ))
}
