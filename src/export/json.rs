//! JSON export of a spending summary
//!
//! Wraps the summary in a versioned envelope so consumers can check
//! compatibility before reading it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::reports::Summary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned summary export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: Summary,
}

impl SummaryExport {
    pub fn new(summary: &Summary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: summary.clone(),
        }
    }
}

/// Write the summary as pretty-printed JSON
pub fn export_summary_json<W: Write>(summary: &Summary, writer: &mut W) -> SpendResult<()> {
    let export = SummaryExport::new(summary);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseFilter, Money};
    use crate::reports::ReportOptions;
    use chrono::NaiveDate;

    fn summary() -> Summary {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expenses = vec![Expense::new(1, "Market", date, Money::from_cents(1234))];
        Summary::generate(&expenses, &[], &ExpenseFilter::none(), &ReportOptions::new(date))
    }

    #[test]
    fn test_export_shape() {
        let mut buffer = Vec::new();
        export_summary_json(&summary(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["summary"]["total_spent"], 12.34);
        assert_eq!(value["summary"]["vendor_spend"][0]["name"], "Market");
        assert_eq!(value["summary"]["spending_by_month"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_export_reads_back_as_summary() {
        let mut buffer = Vec::new();
        export_summary_json(&summary(), &mut buffer).unwrap();

        let export: SummaryExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.summary, summary());
        assert_eq!(export.app_version, env!("CARGO_PKG_VERSION"));
    }
}
