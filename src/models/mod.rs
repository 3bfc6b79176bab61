mod budget;
mod errors;
mod form;
mod ledger;
#[cfg(test)]
mod tests;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

pub use budget::{BudgetMonitor, BudgetWarning};
pub use errors::LedgerError;
pub use form::{EditDialog, TransactionForm};
pub use ledger::Ledger;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => formatter.write_str("income"),
            TransactionType::Expense => formatter.write_str("expense")
        }
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    /// Parses the type selector text; an empty selection means the default.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "" | "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            other => Err(LedgerError::UnknownTransactionType(other.to_string()))
        }
    }
}
