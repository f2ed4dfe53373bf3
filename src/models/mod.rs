//! Core data models for SpendLens
//!
//! These are the typed, read-only views of the collections fetched from the
//! hosted backend: expenses, categories and budgets, plus the money, id,
//! month and filter types the reports are built from.

pub mod budget;
pub mod category;
pub mod expense;
pub mod filter;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::Budget;
pub use category::{Category, CategoryIndex, UNCATEGORIZED};
pub use expense::{parse_date, Expense, ExpenseSource, RecordError};
pub use filter::{DateRange, ExpenseFilter};
pub use ids::{BudgetId, CategoryId, ExpenseId};
pub use money::Money;
pub use month::MonthKey;
