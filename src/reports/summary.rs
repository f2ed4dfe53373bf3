//! Spending Summary
//!
//! The expense aggregator: filters an expense set and derives total spend,
//! category and vendor breakdowns, and the trailing monthly trend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::budget_usage::BudgetUsage;
use super::input::{parse_expenses, SkippedRecord};
use super::monthly::{spending_by_month, MonthlyTotal, TrendScope, DEFAULT_TREND_MONTHS};
use crate::error::SpendResult;
use crate::models::{Budget, Category, CategoryIndex, Expense, ExpenseFilter, Money};

/// Knobs that are not part of the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Reference date; the trend window ends with this date's month
    pub as_of: NaiveDate,
    /// Number of months in the trend window
    pub trend_months: usize,
    pub trend_scope: TrendScope,
}

impl ReportOptions {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            trend_months: DEFAULT_TREND_MONTHS,
            trend_scope: TrendScope::default(),
        }
    }

    /// Options anchored on today's local date
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

/// One row of a category or vendor breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendEntry {
    pub name: String,
    pub amount: Money,
    /// Number of expenses folded into this row
    pub count: usize,
    /// Share of the summary's total spend
    pub percentage: f64,
}

/// Aggregated view of a filtered expense set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Filter the summary was computed with
    pub filter: ExpenseFilter,
    pub as_of: NaiveDate,
    pub total_spent: Money,
    /// Expenses that passed the filter
    pub expense_count: usize,
    /// Records dropped while parsing the input
    pub skipped: usize,
    /// Totals per category name, largest first
    pub category_breakdown: Vec<SpendEntry>,
    /// Totals per vendor, largest first
    pub vendor_spend: Vec<SpendEntry>,
    /// Trailing monthly totals, oldest first
    pub spending_by_month: Vec<MonthlyTotal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetUsage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_records: Vec<SkippedRecord>,
}

impl Summary {
    /// Aggregate already-parsed expenses
    pub fn generate(
        expenses: &[Expense],
        categories: &[Category],
        filter: &ExpenseFilter,
        options: &ReportOptions,
    ) -> Self {
        let index = CategoryIndex::new(categories);

        let mut total_spent = Money::zero();
        let mut expense_count = 0;
        let mut by_category = GroupedTotals::default();
        let mut by_vendor = GroupedTotals::default();

        for expense in expenses.iter().filter(|e| filter.matches(e)) {
            total_spent += expense.amount;
            expense_count += 1;
            by_category.add(index.resolve(expense.category_id), expense.amount);
            by_vendor.add(&expense.vendor, expense.amount);
        }

        if total_spent == Money::MAX {
            warn!(expense_count, "total spend exceeds the representable range, capping totals");
        }

        let spending_by_month = spending_by_month(
            expenses,
            filter,
            options.trend_scope,
            options.as_of,
            options.trend_months,
        );

        debug!(
            total = total_spent.cents(),
            expense_count,
            categories = by_category.len(),
            vendors = by_vendor.len(),
            "aggregated expenses"
        );

        Self {
            filter: filter.clone(),
            as_of: options.as_of,
            total_spent,
            expense_count,
            skipped: 0,
            category_breakdown: by_category.into_sorted(total_spent),
            vendor_spend: by_vendor.into_sorted(total_spent),
            spending_by_month,
            budget: None,
            skipped_records: Vec::new(),
        }
    }

    /// Attach budget usage for the summary's total spend
    pub fn with_budgets(mut self, budgets: &[Budget]) -> Self {
        self.budget = Some(BudgetUsage::compute(self.total_spent, budgets, &self.filter));
        self
    }

    /// Largest `limit` categories
    pub fn top_categories(&self, limit: usize) -> &[SpendEntry] {
        &self.category_breakdown[..limit.min(self.category_breakdown.len())]
    }

    /// Largest `limit` vendors
    pub fn top_vendors(&self, limit: usize) -> &[SpendEntry] {
        &self.vendor_spend[..limit.min(self.vendor_spend.len())]
    }
}

/// Aggregate a raw JSON expense collection
///
/// Fails only when `records` is not an array; malformed records are skipped
/// and reported through `Summary::skipped`.
pub fn aggregate(
    records: &Value,
    categories: &[Category],
    filter: &ExpenseFilter,
    options: &ReportOptions,
) -> SpendResult<Summary> {
    let parsed = parse_expenses(records)?;
    let mut summary = Summary::generate(&parsed.expenses, categories, filter, options);
    summary.skipped = parsed.skipped_count();
    summary.skipped_records = parsed.skipped;
    Ok(summary)
}

/// Expenses passing the filter, in input order
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| filter.matches(e)).collect()
}

/// Distinct vendors across all expenses, in first-seen order
pub fn distinct_vendors(expenses: &[Expense]) -> Vec<&str> {
    let mut seen = HashSet::new();
    expenses
        .iter()
        .map(|e| e.vendor.as_str())
        .filter(|vendor| seen.insert(*vendor))
        .collect()
}

/// Running totals keyed by name that remember first-seen order
#[derive(Default)]
struct GroupedTotals {
    rows: Vec<(String, Money, usize)>,
    positions: HashMap<String, usize>,
}

impl GroupedTotals {
    fn add(&mut self, name: &str, amount: Money) {
        match self.positions.get(name) {
            Some(&pos) => {
                let row = &mut self.rows[pos];
                row.1 += amount;
                row.2 += 1;
            }
            None => {
                self.positions.insert(name.to_string(), self.rows.len());
                self.rows.push((name.to_string(), amount, 1));
            }
        }
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows by amount descending; the sort is stable so ties keep first-seen order
    fn into_sorted(self, total: Money) -> Vec<SpendEntry> {
        let mut entries: Vec<SpendEntry> = self
            .rows
            .into_iter()
            .map(|(name, amount, count)| SpendEntry {
                percentage: amount.percent_of(total),
                name,
                amount,
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.amount.cmp(&a.amount));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, DateRange, UNCATEGORIZED};
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn options() -> ReportOptions {
        ReportOptions::new(date(2024, 2, 15))
    }

    fn sample_records() -> Value {
        json!([
            {"id": 1, "vendor": "Market", "amount": 10, "category_id": 1, "date": "2024-01-05"},
            {"id": 2, "vendor": "Bistro", "amount": 20, "category_id": 1, "date": "2024-01-10"},
            {"id": 3, "vendor": "Market", "amount": 5, "category_id": null, "date": "2024-02-01"}
        ])
    }

    fn food() -> Vec<Category> {
        vec![Category::new(1, "Food")]
    }

    fn names(entries: &[SpendEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_category_breakdown_example() {
        let summary = aggregate(&sample_records(), &food(), &ExpenseFilter::none(), &options()).unwrap();

        assert_eq!(summary.total_spent, Money::from_cents(3500));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(names(&summary.category_breakdown), vec!["Food", UNCATEGORIZED]);
        assert_eq!(summary.category_breakdown[0].amount.cents(), 3000);
        assert_eq!(summary.category_breakdown[0].count, 2);
        assert_eq!(summary.category_breakdown[1].amount.cents(), 500);
    }

    #[test]
    fn test_date_range_filter_example() {
        let filter = ExpenseFilter::none()
            .with_date_range(DateRange::between(date(2024, 1, 1), date(2024, 1, 31)));
        let summary = aggregate(&sample_records(), &food(), &filter, &options()).unwrap();

        assert_eq!(summary.total_spent.cents(), 3000);
        assert_eq!(summary.expense_count, 2);
        assert_eq!(names(&summary.category_breakdown), vec!["Food"]);
    }

    #[test]
    fn test_vendor_spend_sorted_descending() {
        let summary = aggregate(&sample_records(), &food(), &ExpenseFilter::none(), &options()).unwrap();
        assert_eq!(names(&summary.vendor_spend), vec!["Bistro", "Market"]);
        assert_eq!(summary.vendor_spend[1].amount.cents(), 1500);
    }

    #[test]
    fn test_empty_input() {
        let summary = aggregate(&json!([]), &[], &ExpenseFilter::none(), &options()).unwrap();
        assert!(summary.total_spent.is_zero());
        assert!(summary.category_breakdown.is_empty());
        assert!(summary.vendor_spend.is_empty());
        assert_eq!(summary.spending_by_month.len(), 6);
        assert!(summary.spending_by_month.iter().all(|m| m.total.is_zero()));
    }

    #[test]
    fn test_invalid_top_level_input() {
        let err = aggregate(&json!("nope"), &[], &ExpenseFilter::none(), &options()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_skipped_records_are_counted_not_summed() {
        let records = json!([
            {"id": 1, "vendor": "A", "amount": 10, "date": "2024-01-05"},
            {"id": 2, "vendor": "A", "amount": "NaN?", "date": "2024-01-05"},
            {"id": 3, "vendor": "A", "amount": 10, "date": "31/01/2024"}
        ]);
        let summary = aggregate(&records, &[], &ExpenseFilter::none(), &options()).unwrap();
        assert_eq!(summary.total_spent.cents(), 1000);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.skipped_records.len(), 2);
    }

    #[test]
    fn test_huge_totals_saturate_instead_of_overflowing() {
        let records = Value::Array(
            (0..1100)
                .map(|i| json!({"id": i, "vendor": "Mint", "amount": 8.9e13, "category_id": 1, "date": "2024-02-01"}))
                .collect(),
        );
        let summary = aggregate(&records, &food(), &ExpenseFilter::none(), &options()).unwrap();

        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.expense_count, 1100);
        assert_eq!(summary.total_spent, Money::MAX);
        assert_eq!(summary.category_breakdown[0].amount, Money::MAX);
        assert_eq!(summary.vendor_spend[0].amount, Money::MAX);
        assert!(summary.spending_by_month.iter().all(|m| !m.total.is_negative()));
    }

    #[test]
    fn test_large_finite_amount_is_counted() {
        let records = json!([
            {"id": 1, "vendor": "Yard", "amount": 1.0e14, "date": "2024-01-05"}
        ]);
        let summary = aggregate(&records, &[], &ExpenseFilter::none(), &options()).unwrap();
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.total_spent.cents(), 10_000_000_000_000_000);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let expenses = vec![
            Expense::new(1, "Zeta", date(2024, 1, 1), Money::from_cents(500)),
            Expense::new(2, "Alpha", date(2024, 1, 2), Money::from_cents(500)),
            Expense::new(3, "Mid", date(2024, 1, 3), Money::from_cents(900)),
            Expense::new(4, "Beta", date(2024, 1, 4), Money::from_cents(500)),
        ];
        let summary = Summary::generate(&expenses, &[], &ExpenseFilter::none(), &options());
        assert_eq!(names(&summary.vendor_spend), vec!["Mid", "Zeta", "Alpha", "Beta"]);
    }

    #[test]
    fn test_unknown_category_is_uncategorized() {
        let expenses = vec![
            Expense::new(1, "A", date(2024, 1, 1), Money::from_cents(100)).with_category(CategoryId::new(42)),
            Expense::new(2, "B", date(2024, 1, 1), Money::from_cents(200)),
        ];
        let summary = Summary::generate(&expenses, &food(), &ExpenseFilter::none(), &options());
        assert_eq!(summary.category_breakdown.len(), 1);
        assert_eq!(summary.category_breakdown[0].name, UNCATEGORIZED);
        assert_eq!(summary.category_breakdown[0].amount.cents(), 300);
    }

    #[test]
    fn test_breakdown_sums_to_total_and_is_non_increasing() {
        let expenses: Vec<Expense> = (0..40)
            .map(|i| {
                let mut e = Expense::new(
                    i,
                    format!("Vendor {}", i % 7),
                    date(2024, 1 + (i % 2) as u32, 1 + (i % 28) as u32),
                    Money::from_cents((i * 37) % 1000),
                );
                if i % 3 != 0 {
                    e.category_id = Some(CategoryId::new(i % 4));
                }
                e
            })
            .collect();
        let categories = vec![
            Category::new(1, "Food"),
            Category::new(2, "Travel"),
            Category::new(3, "Home"),
        ];
        let filter = ExpenseFilter::none()
            .with_date_range(DateRange::new(Some(date(2024, 1, 10)), None));
        let summary = Summary::generate(&expenses, &categories, &filter, &options());

        let expected: Money = expenses
            .iter()
            .filter(|e| filter.matches(e))
            .map(|e| e.amount)
            .sum();
        assert_eq!(summary.total_spent, expected);

        let category_sum: Money = summary.category_breakdown.iter().map(|e| e.amount).sum();
        assert_eq!(category_sum, summary.total_spent);
        let vendor_sum: Money = summary.vendor_spend.iter().map(|e| e.amount).sum();
        assert_eq!(vendor_sum, summary.total_spent);

        for pair in summary.category_breakdown.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
        for pair in summary.vendor_spend.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
    }

    #[test]
    fn test_idempotent() {
        let filter = ExpenseFilter::none().with_vendor("Market");
        let first = aggregate(&sample_records(), &food(), &filter, &options()).unwrap();
        let second = aggregate(&sample_records(), &food(), &filter, &options()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentages() {
        let summary = aggregate(&sample_records(), &food(), &ExpenseFilter::none(), &options()).unwrap();
        let pct: f64 = summary.category_breakdown.iter().map(|e| e.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
        assert!((summary.category_breakdown[0].percentage - 300.0 / 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_trend_uses_reference_month() {
        let summary = aggregate(&sample_records(), &food(), &ExpenseFilter::none(), &options()).unwrap();
        let last = summary.spending_by_month.last().unwrap();
        assert_eq!((last.year, last.month, last.label.as_str()), (2024, 2, "Feb"));
        assert_eq!(last.total.cents(), 500);
        let trend: Money = summary.spending_by_month.iter().map(|m| m.total).sum();
        assert_eq!(trend.cents(), 3500);
    }

    #[test]
    fn test_with_budgets() {
        let budgets = vec![Budget::new(1, Money::from_cents(7000), "2024-01")];
        let summary = aggregate(&sample_records(), &food(), &ExpenseFilter::none(), &options())
            .unwrap()
            .with_budgets(&budgets);
        assert_eq!(summary.budget.unwrap().used_percent, Some(50));
    }

    #[test]
    fn test_top_limits() {
        let summary = aggregate(&sample_records(), &food(), &ExpenseFilter::none(), &options()).unwrap();
        assert_eq!(summary.top_vendors(1).len(), 1);
        assert_eq!(summary.top_vendors(10).len(), 2);
        assert!(summary.top_categories(0).is_empty());
    }

    #[test]
    fn test_distinct_vendors_and_filtered_list() {
        let parsed = parse_expenses(&sample_records()).unwrap();
        assert_eq!(distinct_vendors(&parsed.expenses), vec!["Market", "Bistro"]);

        let filter = ExpenseFilter::none().with_vendor("Market");
        let ids: Vec<i64> = filter_expenses(&parsed.expenses, &filter)
            .iter()
            .map(|e| e.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
