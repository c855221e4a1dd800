//! Structured catalog errors
//!
//! Only lookup and argument failures are errors. NaN and infinities coming
//! out of a function are ordinary results and never end up here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const INVALID_SWEEP: &str = "INVALID_SWEEP";
}

/// Failure of a catalog query or evaluation request
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogError {
    /// No entry is registered under this name
    #[error("Function not found: {name}")]
    NotFound {
        name: String,
        /// Registered names that look like what the caller meant
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        suggestions: Vec<String>,
    },

    /// ID outside `[0, count)`
    #[error("Invalid function ID: {id} (catalog holds {count} functions)")]
    OutOfRange { id: i64, count: usize },

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("Invalid sweep: {reason}")]
    InvalidSweep { reason: String },
}

impl CatalogError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into(), suggestions: Vec::new() }
    }

    pub fn out_of_range(id: i64, count: usize) -> Self {
        Self::OutOfRange { id, count }
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory { name: name.into() }
    }

    pub fn invalid_sweep(reason: impl Into<String>) -> Self {
        Self::InvalidSweep { reason: reason.into() }
    }

    /// Builder: attach similar names to a `NotFound` error
    pub fn with_suggestions(mut self, similar: Vec<String>) -> Self {
        if let Self::NotFound { suggestions, .. } = &mut self {
            *suggestions = similar;
        }
        self
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => codes::NOT_FOUND,
            Self::OutOfRange { .. } => codes::OUT_OF_RANGE,
            Self::UnknownCategory { .. } => codes::UNKNOWN_CATEGORY,
            Self::InvalidSweep { .. } => codes::INVALID_SWEEP,
        }
    }

    /// Hint for fixing the request
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::NotFound { suggestions, .. } if !suggestions.is_empty() => Some(format!(
                "Similar: {}. Use list_functions for the full list.",
                suggestions.join(", ")
            )),
            Self::NotFound { .. } => Some("Use list_functions for the full list.".to_string()),
            Self::OutOfRange { count, .. } if *count == 0 => {
                Some("The catalog is empty; register functions first.".to_string())
            }
            Self::OutOfRange { count, .. } => Some(format!("Use an ID between 0 and {}.", count - 1)),
            Self::UnknownCategory { .. } => Some("Use list_categories for valid categories.".to_string()),
            Self::InvalidSweep { .. } => Some("Require finite x_min < x_max and samples >= 1.".to_string()),
        }
    }
}
