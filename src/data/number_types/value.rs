//! # Tagged values
//!
//! The heuristics mark exhausted rows and columns by overwriting their costs with an infinity
//! sentinel, and the potential computation needs a "not yet determined" marker. Both sentinels
//! are explicit variants of a tagged type rather than magic numbers.
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::data::number_types::traits::TransportNumber;

/// A number extended with a positive infinity and an unknown sentinel.
///
/// `Infinity` compares greater than every finite value. `Unknown` is incomparable: it must only
/// ever be tested with [`Value::is_unknown`], never compared or used in arithmetic. Arithmetic
/// involving `Unknown` indicates a violated invariant and panics.
#[derive(Clone, Debug)]
pub enum Value<F> {
    /// An ordinary, finite quantity or cost.
    Finite(F),
    /// Larger than every finite value. Marks cells excluded from further selection.
    Infinity,
    /// Not yet determined. Marks potentials that propagation has not reached.
    Unknown,
}

impl<F> Value<F> {
    /// Whether this value is the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Whether this value is the infinity sentinel.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Value::Infinity)
    }

    /// A reference to the inner value, if finite.
    pub fn finite(&self) -> Option<&F> {
        match self {
            Value::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// The inner value, if finite.
    pub fn into_finite(self) -> Option<F> {
        match self {
            Value::Finite(value) => Some(value),
            _ => None,
        }
    }
}

impl<F: TransportNumber> Value<F> {
    /// Compare two values that are known, that is, not the unknown sentinel.
    ///
    /// Callers must have established that neither side is `Unknown`.
    pub fn cmp_known(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).expect("Comparison with an unknown value.")
    }
}

impl<F> From<F> for Value<F> {
    fn from(value: F) -> Self {
        Value::Finite(value)
    }
}

impl<F: TransportNumber> PartialEq for Value<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Finite(left), Value::Finite(right)) => left == right,
            (Value::Infinity, Value::Infinity) => true,
            // Unknown equals nothing, not even itself.
            _ => false,
        }
    }
}

impl<F: TransportNumber> PartialOrd for Value<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Unknown, _) | (_, Value::Unknown) => None,
            (Value::Finite(left), Value::Finite(right)) => left.partial_cmp(right),
            (Value::Infinity, Value::Infinity) => Some(Ordering::Equal),
            (Value::Infinity, Value::Finite(_)) => Some(Ordering::Greater),
            (Value::Finite(_), Value::Infinity) => Some(Ordering::Less),
        }
    }
}

impl<F: TransportNumber> Add for Value<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        match (self, other) {
            (Value::Finite(left), Value::Finite(right)) => Value::Finite(left + right),
            (Value::Infinity, Value::Finite(_)) | (Value::Finite(_), Value::Infinity) => {
                Value::Infinity
            }
            (Value::Infinity, Value::Infinity) => Value::Infinity,
            _ => panic!("Arithmetic on an unknown value."),
        }
    }
}

impl<F: TransportNumber> Sub for Value<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        match (self, other) {
            (Value::Finite(left), Value::Finite(right)) => Value::Finite(left - right),
            (Value::Infinity, Value::Finite(_)) => Value::Infinity,
            (_, Value::Infinity) => panic!("Negative infinity is not representable."),
            _ => panic!("Arithmetic on an unknown value."),
        }
    }
}

impl<F: fmt::Display> fmt::Display for Value<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Finite(value) => value.fmt(f),
            Value::Infinity => write!(f, "inf"),
            Value::Unknown => write!(f, "?"),
        }
    }
}
