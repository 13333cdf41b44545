//! # Traits
//!
//! The transportation algorithm is defined over ordered numbers supporting addition, subtraction
//! and multiplication. Division is never needed: pivoting only shifts quantities around a cycle.
//!
//! The trait is implemented automatically for every type satisfying its bounds, so both exact
//! types (such as `num::rational::Ratio`) and floating point numbers can be plugged in. When
//! using floats, precision semantics are the caller's responsibility.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num::Zero;

/// All numeric operations the solver requires of a quantity or cost.
///
/// A deliberate subset of a field: no division, no negation. The comparison is partial because
/// floating point types should remain usable; the algorithm never feeds NaNs into comparisons.
pub trait TransportNumber:
    Zero
    + PartialOrd
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + Mul<Self, Output = Self>
    + Clone
    + Debug
    + Display
{
}

impl<T> TransportNumber for T where
    T: Zero
        + PartialOrd
        + Add<T, Output = T>
        + AddAssign<T>
        + Sub<T, Output = T>
        + SubAssign<T>
        + Mul<T, Output = T>
        + Clone
        + Debug
        + Display
{
}
