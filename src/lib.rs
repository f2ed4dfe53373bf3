//! SpendLens - spending reports over fetched expense snapshots
//!
//! This library provides the reporting core of a personal-finance client.
//! Expense, category and budget collections are fetched from a hosted backend
//! and saved as JSON snapshots; SpendLens aggregates them into spending
//! summaries by category, vendor and month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (expenses, categories, budgets, filters)
//! - `reports`: Aggregation of expenses into summaries
//! - `storage`: JSON snapshot loading
//! - `config`: Configuration and path management
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers for the `spendlens` binary
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlens::config::{paths::SpendPaths, settings::Settings};
//! use spendlens::models::ExpenseFilter;
//! use spendlens::reports::aggregate;
//! use spendlens::storage::Snapshot;
//!
//! let paths = SpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let snapshot = Snapshot::load(&paths)?;
//! let options = settings.report_options(chrono::Local::now().date_naive());
//! let summary = aggregate(&snapshot.expenses, &snapshot.categories, &ExpenseFilter::none(), &options)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::SpendError;
