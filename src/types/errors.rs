use rust_decimal::Error as DecimalError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: {0}")]
    Decimal(#[from] DecimalError),
    #[error("Amount error: Value [{0}] is negative")]
    Negative(String)
}
