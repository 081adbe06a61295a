//! Error types for the menu store.

use table_framework::TableError;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error(transparent)]
    Table(#[from] TableError),

    /// A listed food id is not in the food store.
    #[error("Food not found: {0}")]
    FoodNotFound(i32),

    /// A listed food exists but is marked unavailable.
    #[error("Food not available: {0}")]
    FoodUnavailable(i32),

    #[error("Invalid menu date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl MenuError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Table(TableError::DuplicateKey(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Table(TableError::NotFound(_)))
    }
}
