//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new one with the new values.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable for logging and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A probability: a finite number in the closed interval [0, 1].
///
/// Construction is the only validation point; once built, arithmetic on the
/// inner value can assume the range holds.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl ValueObject for Probability {}

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const ONE: Probability = Probability(1.0);

    /// Validate `value` as a probability. `name` is used in the error message.
    pub fn named(name: &str, value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "{name} must be a finite number (got {value})"
            )));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(DomainError::validation(format!(
                "{name} must be between 0 and 1 (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn new(value: f64) -> DomainResult<Self> {
        Self::named("probability", value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// 1 - p.
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(value: Probability) -> Self {
        value.0
    }
}

impl core::fmt::Display for Probability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
