use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{LedgerError, TransactionType};
use crate::types::TransactionId;

/// A discrete user action, applied to the session one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    /// Fills the new-transaction form and presses add.
    Add {
        description: String,
        amount: String,
        transaction_type: TransactionType,
        category: String
    },
    Delete {
        id: TransactionId
    },
    /// Opens the edit dialog for a transaction.
    OpenEdit {
        id: TransactionId
    },
    /// Types into the open edit dialog.
    EditInput {
        description: String,
        amount: String
    },
    SubmitEdit,
    CancelEdit,
    Search {
        query: String
    },
    /// Types a budget limit and commits it.
    BudgetLimit {
        amount: String
    },
    BudgetEnabled {
        enabled: bool
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Add,
    Delete,
    Edit,
    CancelEdit,
    Search,
    BudgetLimit,
    BudgetOn,
    BudgetOff
}

/// Represents a single row of a recorded session file.
///
/// Columns are `action,id,description,amount,type,category`; unused columns
/// may be left empty.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub action: Action,
    pub id: Option<TransactionId>,
    pub description: Option<String>,
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub category: Option<String>
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event [{action:?}] requires a value in the [{column}] column")]
    MissingColumn {
        action: Action,
        column: &'static str
    },
    #[error("Event [{action:?}] is invalid: {source}")]
    Invalid {
        action: Action,
        source: LedgerError
    }
}

impl EventRecord {
    /// Expands the row into the user events it stands for.
    ///
    /// An `edit` row opens the dialog, types the new values and submits, so it
    /// becomes three events.
    pub fn into_events(self) -> Result<Vec<UserEvent>, EventError> {
        let action = self.action;
        let description = self.description.unwrap_or_default();
        let amount = self.amount.unwrap_or_default();

        let events = match action {
            Action::Add => {
                let transaction_type = TransactionType::from_str(self.transaction_type.as_deref().unwrap_or_default())
                    .map_err(|source| EventError::Invalid { action, source })?;

                vec![UserEvent::Add {
                    description,
                    amount,
                    transaction_type,
                    category: self.category.unwrap_or_default()
                }]
            },
            Action::Delete => vec![UserEvent::Delete { id: require_id(action, self.id)? }],
            Action::Edit => vec![
                UserEvent::OpenEdit { id: require_id(action, self.id)? },
                UserEvent::EditInput { description, amount },
                UserEvent::SubmitEdit
            ],
            Action::CancelEdit => vec![
                UserEvent::OpenEdit { id: require_id(action, self.id)? },
                UserEvent::CancelEdit
            ],
            Action::Search => vec![UserEvent::Search { query: description }],
            Action::BudgetLimit => vec![UserEvent::BudgetLimit { amount }],
            Action::BudgetOn => vec![UserEvent::BudgetEnabled { enabled: true }],
            Action::BudgetOff => vec![UserEvent::BudgetEnabled { enabled: false }]
        };

        Ok(events)
    }
}

fn require_id(action: Action, id: Option<TransactionId>) -> Result<TransactionId, EventError> {
    id.ok_or(EventError::MissingColumn { action, column: "id" })
}
