//! # Integration tests
//!
//! Problem files are read, solved with every construction rule and checked against their known
//! optimal objective values, using the public API only.
mod textbook;
