use crate::models::{EditDialog, TransactionForm};
use crate::types::{AmountError, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Description is required for a new transaction")]
    EmptyDescription,
    #[error("Amount [{amount}] is not valid for transaction [{description}]: {source}")]
    InvalidAmount {
        description: String,
        amount: String,
        source: AmountError
    },
    #[error("Category is required for transaction [{description}]")]
    CategoryRequired {
        description: String
    },
    #[error("Amount [{amount}] is not valid for edit of transaction [{transaction_id}]: {source}")]
    InvalidEditAmount {
        transaction_id: TransactionId,
        amount: String,
        source: AmountError
    },
    #[error("Unknown transaction type [{0}]")]
    UnknownTransactionType(String)
}

impl LedgerError {
    pub fn invalid_amount(form: &TransactionForm, source: AmountError) -> Self {
        Self::InvalidAmount {
            description: form.description.clone(),
            amount: form.amount.clone(),
            source
        }
    }

    pub fn category_required(form: &TransactionForm) -> Self {
        Self::CategoryRequired {
            description: form.description.clone()
        }
    }

    pub fn invalid_edit_amount(dialog: &EditDialog, source: AmountError) -> Self {
        Self::InvalidEditAmount {
            transaction_id: dialog.transaction_id(),
            amount: dialog.amount.clone(),
            source
        }
    }
}
