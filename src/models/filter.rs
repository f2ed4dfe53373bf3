//! Report filters
//!
//! A filter narrows the expense set before aggregation. All predicates that
//! are present must hold; absent predicates match everything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::ids::CategoryId;

/// Inclusive date interval; a missing bound is unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Both bounds set
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    /// True when both bounds are set and `from` is after `to`
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Filter set applied to expenses before aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Exact, case-sensitive vendor match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl ExpenseFilter {
    /// A filter that matches every expense
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    /// Check whether an expense passes the date predicate only
    pub fn matches_date(&self, expense: &Expense) -> bool {
        self.date_range
            .map_or(true, |range| range.contains(expense.date))
    }

    /// Check the category and vendor predicates, ignoring the date range
    pub fn matches_attributes(&self, expense: &Expense) -> bool {
        let in_category = self
            .category_id
            .map_or(true, |id| expense.category_id == Some(id));
        let in_vendor = self
            .vendor
            .as_deref()
            .map_or(true, |vendor| expense.vendor == vendor);
        in_category && in_vendor
    }

    /// Check every predicate
    pub fn matches(&self, expense: &Expense) -> bool {
        self.matches_date(expense) && self.matches_attributes(expense)
    }

    pub fn is_empty(&self) -> bool {
        self.date_range.map_or(true, |r| r.is_unbounded())
            && self.category_id.is_none()
            && self.vendor.is_none()
    }
}
