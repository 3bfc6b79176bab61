use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};
use crate::types::Amount;

pub const EXPORT_HEADER: [&str; 5] = ["index", "description", "amount", "type", "category"];

/// Flat row handed to the PDF and CSV exporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    /// One-based position in the ledger.
    pub index: usize,
    pub description: String,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String
}

/// Projects the full ledger into export rows. The search filter never applies here.
pub fn export_rows(transactions: &[Transaction]) -> Vec<ExportRow> {
    transactions.iter()
        .enumerate()
        .map(|(position, transaction)| ExportRow {
            index: position + 1,
            description: transaction.description.clone(),
            amount: transaction.amount,
            transaction_type: transaction.transaction_type,
            category: transaction.category.clone().unwrap_or_default()
        })
        .collect()
}

/// Writes the rows as CSV, header first even when there are no rows.
pub fn write_export<W: Write>(writer: W, rows: &[ExportRow]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(EXPORT_HEADER)?;

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
