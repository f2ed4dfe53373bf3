//! Expense record intake
//!
//! Converts the raw JSON collection handed over by the fetching layer into
//! typed expenses. Individual bad records are dropped and counted; only a
//! wrongly shaped collection is an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{SpendError, SpendResult};
use crate::models::Expense;

/// A record that was left out of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Position in the input array
    pub index: usize,
    pub reason: String,
}

/// Result of parsing an expense collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedExpenses {
    pub expenses: Vec<Expense>,
    pub skipped: Vec<SkippedRecord>,
}

impl ParsedExpenses {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Parse a JSON array of backend expense records
///
/// Fails with `SpendError::InvalidInput` when `value` is not an array.
pub fn parse_expenses(value: &Value) -> SpendResult<ParsedExpenses> {
    let records = value.as_array().ok_or_else(|| {
        SpendError::InvalidInput(format!(
            "expected an array of expense records, got {}",
            json_kind(value)
        ))
    })?;

    let mut parsed = ParsedExpenses {
        expenses: Vec::with_capacity(records.len()),
        skipped: Vec::new(),
    };

    for (index, record) in records.iter().enumerate() {
        match Expense::from_record(record) {
            Ok(expense) => parsed.expenses.push(expense),
            Err(err) => {
                warn!(index, reason = %err, "skipping expense record");
                parsed.skipped.push(SkippedRecord {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        accepted = parsed.expenses.len(),
        skipped = parsed.skipped.len(),
        "parsed expense records"
    );
    Ok(parsed)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
