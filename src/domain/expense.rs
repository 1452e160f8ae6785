use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Amount, PaymentMethod, ValidationError};

/// Column names of the ledger file, in order.
pub const LEDGER_HEADER: [&str; 5] = [
    "date",
    "amount",
    "category",
    "description",
    "payment_method",
];

/// A single recorded expense. Field order matches [`LEDGER_HEADER`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: Amount,
    pub category: String,
    pub description: String,
    pub payment_method: PaymentMethod,
}

impl Expense {
    /// Build an expense from raw tool input.
    ///
    /// The date is checked before the amount, so an entry that is wrong on
    /// both counts reports the date.
    pub fn new(
        date: &str,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Result<Self, ValidationError> {
        let date = parse_date(date)?;
        let amount = Amount::new(amount)?;

        Ok(Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
            payment_method,
        })
    }

    /// Render as one human-readable line, without a trailing newline.
    pub fn render_line(&self) -> String {
        format!(
            "Date: {}, Amount: ${}, Category: {}, Description: {}, Payment: {}",
            self.date, self.amount, self.category, self.description, self.payment_method
        )
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}
