//! Monthly spending trend
//!
//! Buckets expenses by calendar month over a trailing window that ends with
//! the reference month. Months without spending are reported as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Expense, ExpenseFilter, Money, MonthKey};

/// Default number of months in the trend window
pub const DEFAULT_TREND_MONTHS: usize = 6;

/// Which filters the monthly trend honours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendScope {
    /// Category and vendor filters apply; the date range does not, since the
    /// window is its own interval
    #[default]
    Filtered,
    /// Every parsed expense counts regardless of filters
    All,
}

/// Spending total for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Short month name, e.g. "Jan"
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub total: Money,
}

impl MonthlyTotal {
    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }
}

/// Compute totals for the `months` calendar months ending with `as_of`'s month
pub fn spending_by_month(
    expenses: &[Expense],
    filter: &ExpenseFilter,
    scope: TrendScope,
    as_of: NaiveDate,
    months: usize,
) -> Vec<MonthlyTotal> {
    let window = MonthKey::of(as_of).trailing(months);
    let (Some(first), Some(last)) = (window.first().copied(), window.last().copied()) else {
        return Vec::new();
    };

    let mut totals: HashMap<MonthKey, Money> = HashMap::with_capacity(window.len());
    for expense in expenses {
        if scope == TrendScope::Filtered && !filter.matches_attributes(expense) {
            continue;
        }
        let key = MonthKey::of(expense.date);
        if key >= first && key <= last {
            *totals.entry(key).or_default() += expense.amount;
        }
    }

    window
        .into_iter()
        .map(|key| MonthlyTotal {
            label: key.short_name().to_string(),
            year: key.year,
            month: key.month,
            total: totals.get(&key).copied().unwrap_or_default(),
        })
        .collect()
}
