//! Read-only values derived from the ledger on every recompute.

mod export;
mod search;
mod summary;

pub use export::{export_rows, write_export};
pub use search::filter;
pub use summary::Summary;

use crate::models::Transaction;

/// Everything the render surface draws after one recompute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Ledger entries matching the active search, in ledger order.
    pub filtered: Vec<Transaction>,
    /// Aggregates over the full, unfiltered ledger.
    pub summary: Summary
}

impl Frame {
    pub fn compute(transactions: &[Transaction], query: &str) -> Self {
        Self {
            filtered: filter(transactions, query),
            summary: Summary::from_transactions(transactions)
        }
    }
}
