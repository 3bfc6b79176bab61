use crate::models::errors::LedgerError;
use crate::models::{Transaction, TransactionType};
use crate::types::{Amount, TransactionId};

/// Input fields of the new-transaction form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub transaction_type: TransactionType,
    pub category: String
}

impl TransactionForm {
    /// Clears every field back to its default, as happens after a successful add.
    pub fn reset(&mut self) {
        *self = TransactionForm::default();
    }
}

/// Non-blocking edit flow for an existing transaction.
///
/// The dialog works on a copy of the description and amount text. Nothing
/// reaches the ledger unless [`EditDialog::submit`] parses the amount; a
/// failed parse or [`EditDialog::cancel`] abandons the edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDialog {
    transaction_id: TransactionId,
    pub description: String,
    pub amount: String
}

/// Validated edit, ready for [`Ledger::edit`](crate::models::Ledger::edit).
#[derive(Debug, Clone, PartialEq)]
pub struct EditSubmission {
    pub transaction_id: TransactionId,
    pub description: String,
    pub amount: Amount
}

impl EditDialog {
    /// Opens the dialog pre-filled with the current values.
    pub fn open(transaction: &Transaction) -> Self {
        Self {
            transaction_id: transaction.id,
            description: transaction.description.clone(),
            amount: transaction.amount.to_string()
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    pub fn submit(self) -> Result<EditSubmission, LedgerError> {
        let amount = Amount::parse_entry(&self.amount)
            .map_err(|error| LedgerError::invalid_edit_amount(&self, error))?;

        Ok(EditSubmission {
            transaction_id: self.transaction_id,
            description: self.description,
            amount
        })
    }

    pub fn cancel(self) -> TransactionId {
        self.transaction_id
    }
}
