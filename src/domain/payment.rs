use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// How an expense was paid. Stored in the ledger as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PaymentMethod {
    Amex,
    Visa,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Amex,
        PaymentMethod::Visa,
        PaymentMethod::Cash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Amex => "amex",
            PaymentMethod::Visa => "visa",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    /// Parsing ignores case: "VISA", "Visa" and "visa" are the same method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amex" => Ok(PaymentMethod::Amex),
            "visa" => Ok(PaymentMethod::Visa),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(ValidationError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
