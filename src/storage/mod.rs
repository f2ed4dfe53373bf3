//! Snapshot storage for SpendLens
//!
//! The fetching layer saves each backend collection as a JSON file in the data
//! directory. This module reads them back for a single report run. Expenses
//! stay as raw JSON so that malformed records can be skipped individually
//! during aggregation.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use serde_json::Value;
use tracing::debug;

use crate::config::paths::SpendPaths;
use crate::error::{SpendError, SpendResult};
use crate::models::{Budget, Category};
use crate::reports::{parse_expenses, ParsedExpenses};

/// Collections loaded from disk for one report run
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Raw expense records, as fetched
    pub expenses: Value,
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            expenses: Value::Array(Vec::new()),
            categories: Vec::new(),
            budgets: Vec::new(),
        }
    }
}

impl Snapshot {
    /// Load all snapshot files; missing files count as empty collections
    pub fn load(paths: &SpendPaths) -> SpendResult<Self> {
        let expenses: Value =
            read_json(paths.expenses_file())?.unwrap_or_else(|| Value::Array(Vec::new()));
        let categories: Vec<Category> = read_json(paths.categories_file())?.unwrap_or_default();
        let budgets: Vec<Budget> = read_json(paths.budgets_file())?.unwrap_or_default();

        debug!(
            data_dir = %paths.data_dir().display(),
            categories = categories.len(),
            budgets = budgets.len(),
            "loaded snapshot"
        );

        Ok(Self {
            expenses,
            categories,
            budgets,
        })
    }

    /// Parse the raw expense records
    pub fn parse_expenses(&self) -> SpendResult<ParsedExpenses> {
        parse_expenses(&self.expenses)
    }

    /// Find a category by id or exact (case-insensitive) name
    pub fn find_category(&self, query: &str) -> SpendResult<&Category> {
        let by_id = query
            .parse::<crate::models::CategoryId>()
            .ok()
            .and_then(|id| self.categories.iter().find(|c| c.id == id));

        by_id
            .or_else(|| {
                self.categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(query.trim()))
            })
            .ok_or_else(|| SpendError::category_not_found(query))
    }
}
