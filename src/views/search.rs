use crate::models::Transaction;

/// Returns the transactions whose description contains `query`, ignoring case.
///
/// Ledger order is preserved and an empty query keeps every transaction.
pub fn filter(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    let needle = query.to_lowercase();

    transactions.iter()
        .filter(|transaction| transaction.description.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
