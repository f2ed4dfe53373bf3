//! Expense list display
//!
//! Renders filtered expenses as a table in the order given.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::config::Settings;
use crate::models::{CategoryIndex, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Items")]
    items: String,
}

/// Format expenses as a table
pub fn format_expense_table(
    expenses: &[&Expense],
    categories: &CategoryIndex<'_>,
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No expenses found for the selected filters.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: e.date.format(&settings.date_format).to_string(),
        vendor: truncate(&e.vendor, 30),
        category: categories.resolve(e.category_id).to_string(),
        amount: e.amount.format_with_symbol(&settings.currency_symbol),
        source: e.source.map_or_else(|| "-".to_string(), |s| s.to_string()),
        items: truncate(&e.items.join(", "), 40),
    });

    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .to_string()
}

/// Format the vendor list, one per line
pub fn format_vendor_list(vendors: &[&str]) -> String {
    if vendors.is_empty() {
        return "No vendors found.".to_string();
    }
    vendors.join("\n")
}
