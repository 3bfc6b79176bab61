use crate::models::TransactionType;
use crate::types::{Amount, TransactionId};

/// A single recorded income or expense entry.
///
/// Transactions are only created by [`Ledger::add`](crate::models::Ledger::add)
/// and only modified in place by [`Ledger::edit`](crate::models::Ledger::edit).
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Session unique id, never reused.
    pub id: TransactionId,
    /// Label as the user typed it.
    pub description: String,
    /// Non-negative amount.
    pub amount: Amount,
    pub transaction_type: TransactionType,
    /// Optional free-text category; blank input is stored as `None`.
    pub category: Option<String>
}
