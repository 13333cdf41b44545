//! # Transportation problems
//!
//! The problem description (costs, supply, demand) with its validation rules, and the solution
//! type a fully solved problem is reported as.
pub mod error;
pub mod model;
pub mod solution;
