//! Budget usage
//!
//! How much of the budgeted amount the reported spending has used up.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, ExpenseFilter, Money};

/// Spending measured against budgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Sum of the budgets considered
    pub total_budget: Money,
    /// Number of budgets considered
    pub budget_count: usize,
    /// Spent / budget as a rounded percentage; `None` when nothing is budgeted
    pub used_percent: Option<u32>,
}

impl BudgetUsage {
    /// Measure `spent` against `budgets`
    ///
    /// When the filter names a category, only budgets for that category count.
    pub fn compute(spent: Money, budgets: &[Budget], filter: &ExpenseFilter) -> Self {
        let relevant: Vec<&Budget> = budgets
            .iter()
            .filter(|b| {
                filter
                    .category_id
                    .map_or(true, |id| b.category_id == Some(id))
            })
            .collect();

        let total_budget: Money = relevant.iter().map(|b| b.amount).sum();
        let used_percent = if total_budget.is_positive() {
            Some(spent.percent_of(total_budget).round().max(0.0) as u32)
        } else {
            None
        };

        Self {
            total_budget,
            budget_count: relevant.len(),
            used_percent,
        }
    }

    /// Percentage for display, "N/A" when nothing is budgeted
    pub fn used_label(&self) -> String {
        match self.used_percent {
            Some(pct) => format!("{}%", pct),
            None => "N/A".to_string(),
        }
    }
}
