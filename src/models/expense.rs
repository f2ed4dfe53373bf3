//! Expense model
//!
//! An expense is a single recorded purchase. Records arrive from the hosted
//! backend as loosely typed JSON; `Expense::from_record` turns one record into
//! a typed value or explains why it cannot be used.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// How an expense was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseSource {
    Receipt,
    Email,
    Manual,
}

impl ExpenseSource {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Receipt" => Some(Self::Receipt),
            "Email" => Some(Self::Email),
            "Manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receipt => write!(f, "Receipt"),
            Self::Email => write!(f, "Email"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

/// A single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Merchant name, compared exactly
    pub vendor: String,

    /// Calendar date of the purchase
    pub date: NaiveDate,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Category, if one was assigned
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Receipt line items
    #[serde(default)]
    pub items: Vec<String>,

    /// Tax portion of the amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ExpenseSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    /// Create an uncategorized expense with no items
    pub fn new(
        id: i64,
        vendor: impl Into<String>,
        date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            id: ExpenseId::new(id),
            vendor: vendor.into(),
            date,
            amount,
            category_id: None,
            items: Vec::new(),
            tax: None,
            source: None,
            notes: None,
        }
    }

    /// Assign a category
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Build an expense from one backend JSON record
    ///
    /// Required: `id` (integer), `vendor` (string), `date` (parseable date),
    /// `amount` (finite, non-negative number or numeric string). Everything
    /// else is optional and tolerated when malformed.
    pub fn from_record(record: &Value) -> Result<Self, RecordError> {
        let obj = record.as_object().ok_or(RecordError::NotAnObject)?;

        let id = match required(obj, "id")? {
            Value::Number(n) => n.as_i64().ok_or_else(|| invalid("id", &Value::Number(n.clone())))?,
            other => return Err(invalid("id", other)),
        };

        let vendor = match required(obj, "vendor")? {
            Value::String(s) => s.clone(),
            other => return Err(invalid("vendor", other)),
        };

        let date = match required(obj, "date")? {
            Value::String(s) => parse_date(s).ok_or_else(|| RecordError::BadDate(s.clone()))?,
            other => return Err(invalid("date", other)),
        };

        let amount = parse_amount(required(obj, "amount")?)?;

        let category_id = match obj.get("category_id") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => Some(CategoryId::new(
                n.as_i64()
                    .ok_or_else(|| invalid("category_id", &Value::Number(n.clone())))?,
            )),
            Some(Value::String(s)) => Some(
                s.parse::<CategoryId>()
                    .map_err(|_| invalid("category_id", &Value::String(s.clone())))?,
            ),
            Some(other) => return Err(invalid("category_id", other)),
        };

        Ok(Self {
            id: ExpenseId::new(id),
            vendor,
            date,
            amount,
            category_id,
            items: obj.get("items").map(parse_items).unwrap_or_default(),
            tax: obj.get("tax").and_then(|v| parse_amount(v).ok()),
            source: obj
                .get("source")
                .and_then(Value::as_str)
                .and_then(ExpenseSource::from_label),
            notes: obj
                .get("notes")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

/// Why a backend record could not become an `Expense`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("record is not an object")]
    NotAnObject,

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for '{field}': {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("unparseable date '{0}'")]
    BadDate(String),

    #[error("amount is not a finite number: {0}")]
    BadAmount(String),

    #[error("amount is negative: {0}")]
    NegativeAmount(String),
}

fn required<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn invalid(field: &'static str, value: &Value) -> RecordError {
    RecordError::InvalidField {
        field,
        value: value.to_string(),
    }
}

/// Parse an amount given as a JSON number or numeric string
fn parse_amount(value: &Value) -> Result<Money, RecordError> {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| RecordError::BadAmount(value.to_string()))?;

    if raw < 0.0 {
        return Err(RecordError::NegativeAmount(value.to_string()));
    }
    Money::from_decimal(raw).ok_or_else(|| RecordError::BadAmount(value.to_string()))
}

/// Parse a calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and local datetimes without an
/// offset (`T` or space separated, optional fractional seconds). For RFC 3339
/// the date is taken in the timestamp's own offset.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse line items
///
/// The backend stores items as a JSON-encoded string; arrays are accepted too.
fn parse_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(inner @ Value::Array(_)) => parse_items(&inner),
            _ => vec![s.clone()],
        },
        _ => Vec::new(),
    }
}
