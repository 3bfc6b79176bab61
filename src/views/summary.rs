use std::collections::HashMap;

use crate::models::{Transaction, TransactionType};
use crate::types::Amount;

/// Label used for transactions recorded without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Totals of one category within one transaction type.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub transaction_type: TransactionType,
    pub total: Amount,
    pub count: usize
}

/// Two series aligned to ledger order and labelled by description.
///
/// Each position carries the amount in the series matching the transaction
/// type and zero in the other one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub expenses: Vec<Amount>,
    pub incomes: Vec<Amount>
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_income: Amount,
    pub total_expense: Amount,
    /// Total income minus total expense; negative when overspent.
    pub available_balance: Amount,
    /// Per category and type totals, in the order categories first appear.
    pub categories: Vec<CategoryTotal>,
    pub chart: ChartSeries
}

impl Summary {
    /// Recomputes every aggregate with a single pass over the ledger.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Summary::default();
        let mut category_index = HashMap::<(&str, TransactionType), usize>::new();

        for transaction in transactions {
            let (expense, income) = match transaction.transaction_type {
                TransactionType::Income => {
                    summary.total_income += transaction.amount;
                    (Amount::new(), transaction.amount)
                },
                TransactionType::Expense => {
                    summary.total_expense += transaction.amount;
                    (transaction.amount, Amount::new())
                }
            };

            summary.chart.labels.push(transaction.description.clone());
            summary.chart.expenses.push(expense);
            summary.chart.incomes.push(income);

            let category = transaction.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL);
            let index = *category_index.entry((category, transaction.transaction_type)).or_insert_with(|| {
                summary.categories.push(CategoryTotal {
                    category: category.to_string(),
                    transaction_type: transaction.transaction_type,
                    total: Amount::new(),
                    count: 0
                });
                summary.categories.len() - 1
            });

            let entry = &mut summary.categories[index];
            entry.total += transaction.amount;
            entry.count += 1;
        }

        summary.available_balance = summary.total_income;
        summary.available_balance -= summary.total_expense;

        summary
    }
}
