use crate::types::{Amount, AmountError};

/// Raised when total expense moves above the committed limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetWarning {
    pub limit: Amount,
    pub total_expense: Amount
}

/// Compares total expense against a user-set limit.
///
/// The monitor is inert while disabled and fires once per crossing from
/// within budget to over budget, not on every recompute.
#[derive(Debug, Clone, Default)]
pub struct BudgetMonitor {
    enabled: bool,
    limit: Amount,
    over_budget: bool
}

impl BudgetMonitor {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn limit(&self) -> Amount {
        self.limit
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if !enabled {
            self.over_budget = false;
        }
    }

    /// Commits the limit typed by the user. Invalid text keeps the previous limit.
    pub fn commit_limit(&mut self, text: &str) -> Result<Amount, AmountError> {
        self.limit = Amount::parse_entry(text)?;
        Ok(self.limit)
    }

    pub fn check(&mut self, total_expense: Amount) -> Option<BudgetWarning> {
        if !self.enabled {
            return None
        }

        let was_over_budget = self.over_budget;
        self.over_budget = total_expense > self.limit;

        if self.over_budget && !was_over_budget {
            return Some(BudgetWarning {
                limit: self.limit,
                total_expense
            })
        }

        None
    }
}
