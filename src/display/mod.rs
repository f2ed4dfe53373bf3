//! Display formatting for terminal output
//!
//! Renders summaries, expense tables and vendor lists as plain text.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::{format_expense_table, format_vendor_list};
pub use summary::{describe_filter, format_summary};
