use tracing::{debug, warn};

use crate::engine::UserEvent;
use crate::models::{BudgetMonitor, EditDialog, Ledger, TransactionForm};
use crate::surface::Notification;
use crate::types::TransactionId;
use crate::views::Frame;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionConfig {
    /// Rejects new transactions without a category.
    pub require_category: bool
}

/// Result of applying one event: the recomputed frame plus any popups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub frame: Frame,
    pub notifications: Vec<Notification>
}

/// Application state of one tracker session.
///
/// Holds the ledger together with every input the user has typed so far.
/// Each [`UserEvent`] mutates it, then the derived frame is recomputed from
/// scratch and the budget is checked against the new totals.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub ledger: Ledger,
    pub form: TransactionForm,
    pub search: String,
    pub budget_input: String,
    pub budget: BudgetMonitor,
    pub edit: Option<EditDialog>,
    config: SessionConfig
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::compute(self.ledger.as_slice(), &self.search)
    }

    pub fn apply(&mut self, event: UserEvent) -> Update {
        let mut notifications = Vec::new();

        if let Err(reason) = self.mutate(event) {
            warn!("{reason}");
            notifications.push(Notification::Rejected { reason });
        }

        let frame = self.frame();

        if let Some(warning) = self.budget.check(frame.summary.total_expense) {
            warn!("Total expense [{}] exceeds budget limit [{}]", warning.total_expense, warning.limit);
            notifications.push(Notification::BudgetExceeded(warning));
        }

        Update { frame, notifications }
    }

    fn mutate(&mut self, event: UserEvent) -> Result<(), String> {
        match event {
            UserEvent::Add { description, amount, transaction_type, category } => {
                self.form = TransactionForm { description, amount, transaction_type, category };
                let id = self.ledger.add(&mut self.form, self.config.require_category)
                    .map_err(|error| error.to_string())?;
                debug!("Transaction [{id}] added");
            },
            UserEvent::Delete { id } => {
                if self.ledger.delete(id).is_none() {
                    debug!("Transaction [{id}] not found, nothing deleted");
                }
            },
            UserEvent::OpenEdit { id } => self.open_edit(id),
            UserEvent::EditInput { description, amount } => {
                if let Some(dialog) = self.edit.as_mut() {
                    dialog.description = description;
                    dialog.amount = amount;
                }
            },
            UserEvent::SubmitEdit => {
                let Some(dialog) = self.edit.take() else {
                    debug!("No edit dialog open, nothing submitted");
                    return Ok(())
                };

                let submission = dialog.submit().map_err(|error| error.to_string())?;
                let id = submission.transaction_id;

                if !self.ledger.edit(id, submission.description, submission.amount) {
                    debug!("Transaction [{id}] not found, nothing edited");
                }
            },
            UserEvent::CancelEdit => {
                if let Some(dialog) = self.edit.take() {
                    debug!("Edit of transaction [{}] cancelled", dialog.cancel());
                }
            },
            UserEvent::Search { query } => self.search = query,
            UserEvent::BudgetLimit { amount } => {
                self.budget_input = amount;
                let limit = self.budget.commit_limit(&self.budget_input)
                    .map_err(|error| format!("Budget limit [{}] rejected: {error}", self.budget_input))?;
                debug!("Budget limit set to [{limit}]");
            },
            UserEvent::BudgetEnabled { enabled } => self.budget.set_enabled(enabled)
        }

        Ok(())
    }

    fn open_edit(&mut self, id: TransactionId) {
        match self.ledger.get(id) {
            Some(transaction) => self.edit = Some(EditDialog::open(transaction)),
            None => {
                self.edit = None;
                debug!("Transaction [{id}] not found, no edit dialog opened");
            }
        }
    }
}
