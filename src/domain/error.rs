use thiserror::Error;

/// Rejection reasons for a new expense. The messages are shown verbatim to
/// the caller, so they must not carry anything internal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Amount must be positive.")]
    NonPositiveAmount,

    #[error("Amount must be a finite number.")]
    NonFiniteAmount,

    #[error("Invalid payment method '{0}': expected one of amex, visa, cash")]
    UnknownPaymentMethod(String),
}
