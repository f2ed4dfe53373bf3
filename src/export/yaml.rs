//! YAML export of a spending summary
//!
//! Same envelope as the JSON export, for human-readable archives.

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::export::json::SummaryExport;
use crate::reports::Summary;

/// Write the summary as YAML with a short header comment
pub fn export_summary_yaml<W: Write>(summary: &Summary, writer: &mut W) -> SpendResult<()> {
    let export = SummaryExport::new(summary);
    let err = |e: std::io::Error| SpendError::Export(e.to_string());

    writeln!(writer, "# SpendLens Summary Export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendError::Export(e.to_string()))
}
