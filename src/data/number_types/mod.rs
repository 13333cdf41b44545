//! # Number types
//!
//! The solver is generic over the number representation. A trait collects the operations the
//! algorithm needs, and a tagged value type adds the two sentinels the heuristics and the
//! potential computation rely on.
pub mod traits;
pub mod value;
