//! Export module for SpendLens
//!
//! Writes a spending summary in machine-readable formats:
//! - CSV: flat table for spreadsheets
//! - JSON: versioned envelope for other tools
//! - YAML: the same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_summary_csv;
pub use self::json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_summary_yaml;

use clap::ValueEnum;
use std::io::Write;

use crate::error::SpendResult;
use crate::reports::Summary;

/// Machine-readable output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

/// Write `summary` in the given format
pub fn export_summary<W: Write>(summary: &Summary, format: ExportFormat, writer: &mut W) -> SpendResult<()> {
    match format {
        ExportFormat::Csv => export_summary_csv(summary, writer),
        ExportFormat::Json => export_summary_json(summary, writer),
        ExportFormat::Yaml => export_summary_yaml(summary, writer),
    }
}
