//! # Algorithms
//!
//! The optimization logic. Currently a single algorithm: the MODI (modified distribution)
//! method for balanced transportation problems.
pub mod modi;
