//! Terminal rendering of a spending summary

use super::report::{format_bar, format_percentage, heading, truncate};
use crate::config::Settings;
use crate::models::{CategoryIndex, ExpenseFilter, Money};
use crate::reports::{SpendEntry, Summary};

const WIDTH: usize = 72;
const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 28;

/// Render the full summary for terminal display
pub fn format_summary(
    summary: &Summary,
    categories: &CategoryIndex<'_>,
    settings: &Settings,
) -> String {
    let money = |m: Money| m.format_with_symbol(&settings.currency_symbol);
    let mut output = String::new();

    output.push_str(&format!("Spending Report (as of {})\n", summary.as_of.format(&settings.date_format)));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!("Filters:        {}\n", describe_filter(&summary.filter, categories, settings)));
    output.push_str(&format!("Total Spent:    {}\n", money(summary.total_spent)));
    output.push_str(&format!("Expenses:       {}\n", summary.expense_count));
    if let Some(budget) = &summary.budget {
        output.push_str(&format!(
            "Budget Used:    {} of {}\n",
            budget.used_label(),
            money(budget.total_budget)
        ));
    }
    if summary.skipped > 0 {
        output.push_str(&format!("Skipped:        {} malformed record(s)\n", summary.skipped));
    }

    output.push('\n');
    output.push_str(&heading("Spending by Category", WIDTH));
    push_entries(&mut output, &summary.category_breakdown, settings);

    output.push('\n');
    output.push_str(&heading(
        &format!("Top Vendors (up to {})", settings.top_vendors),
        WIDTH,
    ));
    push_entries(&mut output, summary.top_vendors(settings.top_vendors), settings);

    output.push('\n');
    output.push_str(&heading("Monthly Trend", WIDTH));
    let peak = summary
        .spending_by_month
        .iter()
        .map(|m| m.total)
        .max()
        .unwrap_or_default();
    for month in &summary.spending_by_month {
        output.push_str(&format!(
            "{} {:<5} {:>12}  {}\n",
            month.label,
            month.year,
            money(month.total),
            format_bar(month.total, peak, BAR_WIDTH)
        ));
    }

    output
}

fn push_entries(output: &mut String, entries: &[SpendEntry], settings: &Settings) {
    if entries.is_empty() {
        output.push_str("  (no spending)\n");
        return;
    }

    let peak = entries[0].amount;
    for entry in entries {
        output.push_str(&format!(
            "  {:<name_width$} {:>12} {:>6}  {}\n",
            truncate(&entry.name, NAME_WIDTH),
            entry.amount.format_with_symbol(&settings.currency_symbol),
            format_percentage(entry.percentage),
            format_bar(entry.amount, peak, BAR_WIDTH),
            name_width = NAME_WIDTH,
        ));
    }
}

/// One-line description of the active filters
pub fn describe_filter(
    filter: &ExpenseFilter,
    categories: &CategoryIndex<'_>,
    settings: &Settings,
) -> String {
    if filter.is_empty() {
        return "none".to_string();
    }

    let mut parts = Vec::new();
    if let Some(range) = filter.date_range.filter(|r| !r.is_unbounded()) {
        let fmt = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format(&settings.date_format).to_string())
                .unwrap_or_else(|| "…".to_string())
        };
        parts.push(format!("dates {} to {}", fmt(range.from), fmt(range.to)));
    }
    if let Some(id) = filter.category_id {
        parts.push(format!("category \"{}\"", categories.resolve(Some(id))));
    }
    if let Some(vendor) = &filter.vendor {
        parts.push(format!("vendor \"{}\"", vendor));
    }
    parts.join(", ")
}
