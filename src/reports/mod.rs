//! Reports module for SpendLens
//!
//! Turns fetched expense collections into spending summaries: totals,
//! category and vendor breakdowns, the monthly trend and budget usage.

pub mod budget_usage;
pub mod input;
pub mod monthly;
pub mod summary;

pub use budget_usage::BudgetUsage;
pub use input::{parse_expenses, ParsedExpenses, SkippedRecord};
pub use monthly::{spending_by_month, MonthlyTotal, TrendScope, DEFAULT_TREND_MONTHS};
pub use summary::{
    aggregate, distinct_vendors, filter_expenses, ReportOptions, SpendEntry, Summary,
};
