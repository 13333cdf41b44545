//! # Data structures
//!
//! Containers, number types and the problem description that the algorithm module operates on.
pub mod linear_algebra;
pub mod number_types;
pub mod transport;
