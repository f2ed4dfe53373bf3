//! CLI commands for reports
//!
//! Bridges clap arguments to the aggregator and the renderers.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_expense_table, format_summary, format_vendor_list};
use crate::error::{SpendError, SpendResult};
use crate::export::{export_summary, ExportFormat};
use crate::models::{parse_date, CategoryIndex, DateRange, ExpenseFilter};
use crate::reports::{aggregate, distinct_vendors, filter_expenses, ReportOptions};
use crate::storage::Snapshot;

/// Filter flags shared by the report and expense listing commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Category id or name
    #[arg(short, long)]
    pub category: Option<String>,

    /// Vendor, exact match
    #[arg(long)]
    pub vendor: Option<String>,
}

impl FilterArgs {
    /// Resolve the flags into an `ExpenseFilter`
    pub fn to_filter(&self, snapshot: &Snapshot) -> SpendResult<ExpenseFilter> {
        let from = self.from.as_deref().map(|s| parse_cli_date("start", s)).transpose()?;
        let to = self.to.as_deref().map(|s| parse_cli_date("end", s)).transpose()?;

        let range = DateRange::new(from, to);
        if range.is_inverted() {
            return Err(SpendError::Validation(format!(
                "Start date {} is after end date {}",
                self.from.as_deref().unwrap_or_default(),
                self.to.as_deref().unwrap_or_default()
            )));
        }

        let mut filter = ExpenseFilter::none();
        if !range.is_unbounded() {
            filter = filter.with_date_range(range);
        }
        if let Some(query) = &self.category {
            filter = filter.with_category(snapshot.find_category(query)?.id);
        }
        if let Some(vendor) = &self.vendor {
            filter = filter.with_vendor(vendor.clone());
        }
        Ok(filter)
    }
}

fn parse_cli_date(which: &str, s: &str) -> SpendResult<NaiveDate> {
    parse_date(s).ok_or_else(|| {
        SpendError::Validation(format!("Invalid {} date: {}. Use YYYY-MM-DD", which, s))
    })
}

/// Output format for the report command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Csv,
    Json,
    Yaml,
}

impl ReportFormat {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Terminal => None,
            Self::Csv => Some(ExportFormat::Csv),
            Self::Json => Some(ExportFormat::Json),
            Self::Yaml => Some(ExportFormat::Yaml),
        }
    }
}

/// Arguments for the `report` command
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Terminal)]
    pub format: ReportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reference date for the monthly trend (defaults to today)
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Arguments for the `expenses` command
#[derive(Args, Debug, Clone)]
pub struct ExpenseArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of rows to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle the `report` command
pub fn handle_report_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: ReportArgs,
) -> SpendResult<()> {
    let filter = args.filter.to_filter(snapshot)?;
    let as_of = match args.as_of.as_deref() {
        Some(s) => parse_cli_date("reference", s)?,
        None => ReportOptions::today().as_of,
    };
    let options = settings.report_options(as_of);

    let summary = aggregate(&snapshot.expenses, &snapshot.categories, &filter, &options)?
        .with_budgets(&snapshot.budgets);
    let index = CategoryIndex::new(&snapshot.categories);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format.export_format() {
        Some(format) => export_summary(&summary, format, &mut writer)?,
        None => write!(writer, "{}", format_summary(&summary, &index, settings))?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Report exported to: {}", path.display());
    }
    Ok(())
}

/// Handle the `expenses` command
pub fn handle_expenses_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: ExpenseArgs,
) -> SpendResult<()> {
    let filter = args.filter.to_filter(snapshot)?;
    let parsed = snapshot.parse_expenses()?;

    let matching = filter_expenses(&parsed.expenses, &filter);
    let shown = &matching[..args.limit.unwrap_or(matching.len()).min(matching.len())];
    let index = CategoryIndex::new(&snapshot.categories);

    println!("Filtered Expenses ({})", matching.len());
    println!("{}", format_expense_table(shown, &index, settings));
    if shown.len() < matching.len() {
        println!("... {} more", matching.len() - shown.len());
    }
    if parsed.skipped_count() > 0 {
        println!("Skipped {} malformed record(s)", parsed.skipped_count());
    }
    Ok(())
}

/// Handle the `vendors` command
pub fn handle_vendors_command(snapshot: &Snapshot) -> SpendResult<()> {
    let parsed = snapshot.parse_expenses()?;
    println!("{}", format_vendor_list(&distinct_vendors(&parsed.expenses)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId};

    fn snapshot() -> Snapshot {
        Snapshot {
            categories: vec![Category::new(1, "Food")],
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_empty_args_give_empty_filter() {
        let filter = FilterArgs::default().to_filter(&snapshot()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_full_filter() {
        let args = FilterArgs {
            from: Some("2024-01-01".into()),
            to: Some("2024-01-31".into()),
            category: Some("food".into()),
            vendor: Some("Cafe".into()),
        };
        let filter = args.to_filter(&snapshot()).unwrap();
        assert_eq!(
            filter.date_range,
            Some(DateRange::between(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
            ))
        );
        assert_eq!(filter.category_id, Some(CategoryId::new(1)));
        assert_eq!(filter.vendor.as_deref(), Some("Cafe"));
    }

    #[test]
    fn test_rejects_bad_and_inverted_dates() {
        let bad = FilterArgs {
            from: Some("01/02/2024".into()),
            ..FilterArgs::default()
        };
        assert!(bad.to_filter(&snapshot()).unwrap_err().is_validation());

        let inverted = FilterArgs {
            from: Some("2024-02-01".into()),
            to: Some("2024-01-01".into()),
            ..FilterArgs::default()
        };
        assert!(inverted.to_filter(&snapshot()).unwrap_err().is_validation());
    }

    #[test]
    fn test_unknown_category() {
        let args = FilterArgs {
            category: Some("Rent".into()),
            ..FilterArgs::default()
        };
        assert!(args.to_filter(&snapshot()).unwrap_err().is_not_found());
    }
}
