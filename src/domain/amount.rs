use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A strictly positive, finite amount of money in currency units.
///
/// Amounts travel as plain decimal numbers (the tool interface takes a JSON
/// number), so this wraps an `f64` rather than integer cents.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || value <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if value.is_infinite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

/// Format a decimal amount with the shortest round-tripping representation,
/// keeping at least one fractional digit.
/// Example: 42.5 -> "42.5", 42.0 -> "42.0", 0.1 -> "0.1"
pub fn format_amount(value: f64) -> String {
    let rendered = value.to_string();
    if value.is_finite() && !rendered.contains('.') {
        format!("{}.0", rendered)
    } else {
        rendered
    }
}
