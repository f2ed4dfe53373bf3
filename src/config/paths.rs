//! Path management for SpendLens
//!
//! Resolves where settings and fetched snapshots live.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDLENS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendlens` or `~/.config/spendlens`
//! 3. Windows: `%APPDATA%\spendlens`

use std::path::{Path, PathBuf};

use crate::error::SpendError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDLENS_DATA_DIR";

/// Manages all paths used by SpendLens
#[derive(Debug, Clone)]
pub struct SpendPaths {
    base_dir: PathBuf,
}

impl SpendPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, SpendError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SpendPaths with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Settings file (`<base>/config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory holding fetched snapshots (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendError::Io(format!("Failed to create data directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SpendError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("spendlens"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendlens"))
}
