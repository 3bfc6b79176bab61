use crate::models::errors::LedgerError;
use crate::models::{Transaction, TransactionForm};
use crate::types::{Amount, TransactionId};

/// Insertion ordered collection of the session's transactions.
///
/// This is the only place ledger data is mutated. Ids come from a monotonic
/// counter, so they are unique for the whole session and never reused after
/// a delete.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1
        }
    }

    /// Records the transaction described by `form` and resets the form.
    ///
    /// # Errors
    /// Returns `LedgerError` and leaves both the ledger and the form untouched if:
    /// - The trimmed description is empty.
    /// - The amount text is empty, not a number or negative.
    /// - `require_category` is set and the category is blank.
    pub fn add(&mut self, form: &mut TransactionForm, require_category: bool) -> Result<TransactionId, LedgerError> {
        if form.description.trim().is_empty() {
            return Err(LedgerError::EmptyDescription)
        }

        let amount = Amount::parse_entry(&form.amount)
            .map_err(|error| LedgerError::invalid_amount(form, error))?;

        let category = Some(form.category.trim())
            .filter(|category| !category.is_empty())
            .map(str::to_string);

        if require_category && category.is_none() {
            return Err(LedgerError::category_required(form))
        }

        let id = self.next_id;
        self.next_id += 1;

        self.transactions.push(Transaction {
            id,
            description: form.description.clone(),
            amount,
            transaction_type: form.transaction_type,
            category
        });

        form.reset();

        Ok(id)
    }

    /// Removes the transaction with `id`, returning it when it was present.
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        let position = self.position(id)?;
        Some(self.transactions.remove(position))
    }

    /// Replaces description and amount of the transaction with `id`.
    ///
    /// Type, category and position are kept. No validation happens here; the
    /// caller goes through [`EditDialog`](crate::models::EditDialog) first.
    /// Returns `false` when no transaction has that id.
    pub fn edit(&mut self, id: TransactionId, description: String, amount: Amount) -> bool {
        let Some(position) = self.position(id) else {
            return false
        };

        let transaction = &mut self.transactions[position];
        transaction.description = description;
        transaction.amount = amount;

        true
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|transaction| transaction.id == id)
    }
}
