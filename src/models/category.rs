//! Category model
//!
//! Categories are owned by the hosted backend; the client only reads them to
//! turn an expense's `category_id` into a display name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ids::CategoryId;

/// Display name used for expenses without a resolvable category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A spending category as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Display color (CSS color string)
    #[serde(default)]
    pub color: Option<String>,

    /// Icon identifier
    #[serde(default)]
    pub icon: Option<String>,

    /// Creation time, milliseconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Category {
    /// Create a new category with no color or icon
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            color: None,
            icon: None,
            created_at: None,
        }
    }

    /// The name to show in reports; blank names count as uncategorized
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNCATEGORIZED
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lookup from category id to display name
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex<'a> {
    names: HashMap<CategoryId, &'a str>,
}

impl<'a> CategoryIndex<'a> {
    /// Index a category slice. Later duplicates of an id win.
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            names: categories
                .iter()
                .map(|c| (c.id, c.display_name()))
                .collect(),
        }
    }

    /// Resolve a category reference, falling back to "Uncategorized"
    pub fn resolve(&self, id: Option<CategoryId>) -> &'a str {
        id.and_then(|id| self.names.get(&id).copied())
            .unwrap_or(UNCATEGORIZED)
    }
}
