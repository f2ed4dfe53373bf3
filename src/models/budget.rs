//! Budget model
//!
//! A budget is a spending limit for a month, optionally tied to a category.

use serde::{Deserialize, Serialize};

use super::ids::{BudgetId, CategoryId};
use super::money::Money;

/// A monthly budget record as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Budgeted amount
    pub amount: Money,

    /// Period identifier, as the backend stores it (e.g. "2024-01")
    pub month: String,

    /// Category this budget applies to, if any
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl Budget {
    pub fn new(id: i64, amount: Money, month: impl Into<String>) -> Self {
        Self {
            id: BudgetId::new(id),
            amount,
            month: month.into(),
            category_id: None,
        }
    }

    /// Attach the budget to a category
    pub fn for_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
