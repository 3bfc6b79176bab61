use super::{BudgetMonitor, EditDialog, Ledger, LedgerError, TransactionForm, TransactionType};

use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::types::{Amount, TransactionId};

fn create_form(description: &str, amount: &str, transaction_type: TransactionType, category: &str) -> TransactionForm {
    TransactionForm {
        description: description.to_string(),
        amount: amount.to_string(),
        transaction_type,
        category: category.to_string()
    }
}

fn add(ledger: &mut Ledger, description: &str, amount: &str, transaction_type: TransactionType) -> Result<TransactionId> {
    let mut form = create_form(description, amount, transaction_type, "");
    Ok(ledger.add(&mut form, false)?)
}

#[test]
fn test_successful_add_appends_and_resets_form() -> Result<()> {
    let mut ledger = Ledger::new();
    let mut form = create_form("Coffee", "4.5", TransactionType::Income, "Food");

    let id = ledger.add(&mut form, false)?;
    let transaction = ledger.get(id).ok_or_else(|| anyhow!("Transaction missing from ledger"))?;

    assert_eq!(transaction.description, "Coffee");
    assert_eq!(transaction.amount, Amount::from_str("4.5")?);
    assert_eq!(transaction.transaction_type, TransactionType::Income);
    assert_eq!(transaction.category.as_deref(), Some("Food"));
    assert_eq!(form, TransactionForm::default());
    assert_eq!(form.transaction_type, TransactionType::Expense);

    Ok(())
}

#[test]
fn test_add_with_empty_description_is_rejected() {
    let mut ledger = Ledger::new();
    let mut form = create_form("   ", "10", TransactionType::Expense, "");
    let original_form = form.clone();

    let result = ledger.add(&mut form, false);

    assert!(matches!(result, Err(LedgerError::EmptyDescription)));
    assert!(ledger.is_empty());
    assert_eq!(form, original_form);
}

#[test]
fn test_add_with_invalid_amount_is_rejected() {
    let mut ledger = Ledger::new();

    for amount in ["", "abc", "-5", "1.2.3"] {
        let mut form = create_form("Rent", amount, TransactionType::Expense, "");
        let result = ledger.add(&mut form, false);

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(form.amount, amount);
    }

    assert_eq!(ledger.len(), 0);
}

#[test]
fn test_add_requires_category_only_when_configured() -> Result<()> {
    let mut ledger = Ledger::new();
    let mut form = create_form("Bus", "2", TransactionType::Expense, "  ");

    assert!(matches!(ledger.add(&mut form, true), Err(LedgerError::CategoryRequired { .. })));
    assert!(ledger.is_empty());

    let id = ledger.add(&mut form, false)?;

    assert_eq!(ledger.get(id).and_then(|transaction| transaction.category.clone()), None);

    Ok(())
}

#[test]
fn test_ids_are_unique_and_never_reused() -> Result<()> {
    let mut ledger = Ledger::new();
    let first = add(&mut ledger, "A", "1", TransactionType::Expense)?;
    let second = add(&mut ledger, "B", "1", TransactionType::Expense)?;

    ledger.delete(second);

    let third = add(&mut ledger, "C", "1", TransactionType::Expense)?;

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_ne!(first, third);

    Ok(())
}

#[test]
fn test_add_then_delete_restores_previous_ledger() -> Result<()> {
    let mut ledger = Ledger::new();
    add(&mut ledger, "Coffee", "4.5", TransactionType::Expense)?;
    add(&mut ledger, "Salary", "2000", TransactionType::Income)?;
    let before = ledger.as_slice().to_vec();

    let id = add(&mut ledger, "Lunch", "12", TransactionType::Expense)?;
    let removed = ledger.delete(id).ok_or_else(|| anyhow!("Added transaction was not deleted"))?;

    assert_eq!(removed.description, "Lunch");
    assert_eq!(ledger.as_slice(), before.as_slice());

    Ok(())
}

#[test]
fn test_delete_first_keeps_second_in_order() -> Result<()> {
    let mut ledger = Ledger::new();
    let first = add(&mut ledger, "Coffee", "4.5", TransactionType::Expense)?;
    let second = add(&mut ledger, "Salary", "2000", TransactionType::Income)?;

    ledger.delete(first);

    let ids: Vec<_> = ledger.as_slice().iter().map(|transaction| transaction.id).collect();

    assert_eq!(ids, vec![second]);

    Ok(())
}

#[test]
fn test_delete_of_missing_id_is_a_no_op() -> Result<()> {
    let mut ledger = Ledger::new();
    let id = add(&mut ledger, "Coffee", "4.5", TransactionType::Expense)?;

    assert!(ledger.delete(99).is_none());
    assert!(ledger.delete(id).is_some());
    assert!(ledger.delete(id).is_none());
    assert!(ledger.is_empty());

    Ok(())
}

#[test]
fn test_edit_keeps_type_category_and_position() -> Result<()> {
    let mut ledger = Ledger::new();
    add(&mut ledger, "Coffee", "4.5", TransactionType::Expense)?;
    let mut form = create_form("Salary", "2000", TransactionType::Income, "Work");
    let id = ledger.add(&mut form, false)?;
    add(&mut ledger, "Lunch", "12", TransactionType::Expense)?;

    assert!(ledger.edit(id, "Bonus".to_string(), Amount::from_str("2500")?));

    let transaction = ledger.get(id).ok_or_else(|| anyhow!("Edited transaction missing"))?;

    assert_eq!(transaction.description, "Bonus");
    assert_eq!(transaction.amount, Amount::from_str("2500")?);
    assert_eq!(transaction.transaction_type, TransactionType::Income);
    assert_eq!(transaction.category.as_deref(), Some("Work"));
    assert_eq!(ledger.as_slice()[1].id, id);

    Ok(())
}

#[test]
fn test_edit_of_missing_id_is_a_no_op() -> Result<()> {
    let mut ledger = Ledger::new();
    add(&mut ledger, "Coffee", "4.5", TransactionType::Expense)?;
    let before = ledger.as_slice().to_vec();

    assert!(!ledger.edit(42, "Tea".to_string(), Amount::from_str("3")?));
    assert_eq!(ledger.as_slice(), before.as_slice());

    Ok(())
}

#[test]
fn test_edit_dialog_submits_parsed_values() -> Result<()> {
    let mut ledger = Ledger::new();
    let id = add(&mut ledger, "Coffee", "4.5", TransactionType::Expense)?;
    let transaction = ledger.get(id).ok_or_else(|| anyhow!("Transaction missing"))?;

    let mut dialog = EditDialog::open(transaction);

    assert_eq!(dialog.description, "Coffee");
    assert_eq!(dialog.amount, "4.5");

    dialog.description = "Espresso".to_string();
    dialog.amount = "3.2".to_string();
    let submission = dialog.submit()?;

    assert_eq!(submission.transaction_id, id);
    assert_eq!(submission.amount, Amount::from_str("3.2")?);

    Ok(())
}

#[test]
fn test_edit_dialog_abandons_invalid_amount() -> Result<()> {
    let mut ledger = Ledger::new();
    let id = add(&mut ledger, "Coffee", "4.5", TransactionType::Expense)?;
    let transaction = ledger.get(id).ok_or_else(|| anyhow!("Transaction missing"))?;

    let mut dialog = EditDialog::open(transaction);
    dialog.amount = "four".to_string();

    assert!(matches!(dialog.submit(), Err(LedgerError::InvalidEditAmount { transaction_id, .. }) if transaction_id == id));

    Ok(())
}

#[test]
fn test_transaction_type_parses_selector_text() -> Result<()> {
    assert_eq!(TransactionType::from_str("Income")?, TransactionType::Income);
    assert_eq!(TransactionType::from_str(" expense ")?, TransactionType::Expense);
    assert_eq!(TransactionType::from_str("")?, TransactionType::Expense);
    assert!(matches!(TransactionType::from_str("transfer"), Err(LedgerError::UnknownTransactionType(_))));

    Ok(())
}

#[test]
fn test_budget_monitor_is_inert_while_disabled() -> Result<()> {
    let mut monitor = BudgetMonitor::default();
    monitor.commit_limit("10")?;

    assert!(monitor.check(Amount::from_str("50")?).is_none());

    Ok(())
}

#[test]
fn test_budget_monitor_fires_once_per_crossing() -> Result<()> {
    let mut monitor = BudgetMonitor::default();
    monitor.set_enabled(true);
    monitor.commit_limit("100")?;

    assert!(monitor.check(Amount::from_str("80")?).is_none());

    let warning = monitor.check(Amount::from_str("120")?).ok_or_else(|| anyhow!("Expected a warning"))?;

    assert_eq!(warning.limit, Amount::from_str("100")?);
    assert_eq!(warning.total_expense, Amount::from_str("120")?);
    assert!(monitor.check(Amount::from_str("130")?).is_none());
    assert!(monitor.check(Amount::from_str("100")?).is_none());
    assert!(monitor.check(Amount::from_str("101")?).is_some());

    Ok(())
}

#[test]
fn test_budget_monitor_rearms_after_being_disabled() -> Result<()> {
    let mut monitor = BudgetMonitor::default();
    monitor.set_enabled(true);

    assert!(monitor.check(Amount::from_str("1")?).is_some());

    monitor.set_enabled(false);
    monitor.set_enabled(true);

    assert!(monitor.check(Amount::from_str("1")?).is_some());

    Ok(())
}

#[test]
fn test_budget_monitor_keeps_limit_on_invalid_commit() -> Result<()> {
    let mut monitor = BudgetMonitor::default();

    assert_eq!(monitor.limit(), Amount::new());

    monitor.commit_limit("250")?;

    assert!(monitor.commit_limit("lots").is_err());
    assert!(monitor.commit_limit("-1").is_err());
    assert_eq!(monitor.limit(), Amount::from_str("250")?);

    Ok(())
}
