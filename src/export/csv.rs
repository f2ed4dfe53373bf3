//! CSV export of a spending summary
//!
//! One flat table with a `Section` column so the category breakdown, vendor
//! spend, monthly trend and total fit in a single spreadsheet-friendly file.

use serde::Serialize;
use std::io::Write;

use crate::error::SpendResult;
use crate::reports::{SpendEntry, Summary};

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Section")]
    section: &'a str,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Count")]
    count: Option<usize>,
    #[serde(rename = "Percentage")]
    percentage: Option<String>,
}

impl<'a> CsvRow<'a> {
    fn entry(section: &'a str, entry: &SpendEntry) -> Self {
        Self {
            section,
            name: entry.name.clone(),
            amount: format!("{:.2}", entry.amount.as_decimal()),
            count: Some(entry.count),
            percentage: Some(format!("{:.2}", entry.percentage)),
        }
    }
}

/// Export the summary to CSV
pub fn export_summary_csv<W: Write>(summary: &Summary, writer: W) -> SpendResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    for entry in &summary.category_breakdown {
        out.serialize(CsvRow::entry("category", entry))?;
    }
    for entry in &summary.vendor_spend {
        out.serialize(CsvRow::entry("vendor", entry))?;
    }
    for month in &summary.spending_by_month {
        out.serialize(CsvRow {
            section: "month",
            name: format!("{} ({})", month.key(), month.label),
            amount: format!("{:.2}", month.total.as_decimal()),
            count: None,
            percentage: None,
        })?;
    }
    out.serialize(CsvRow {
        section: "total",
        name: "TOTAL".to_string(),
        amount: format!("{:.2}", summary.total_spent.as_decimal()),
        count: Some(summary.expense_count),
        percentage: None,
    })?;

    out.flush()?;
    Ok(())
}
