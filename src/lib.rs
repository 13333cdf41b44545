//! # A transportation problem solver
//!
//! Balanced transportation problems are solved exactly: an initial basic feasible solution is
//! constructed with one of three classic heuristics and then improved to optimality with the
//! MODI (modified distribution, or stepping-stone) method.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
