//! Error types for the food store.

use table_framework::TableError;
use thiserror::Error;

/// Errors that can occur during food operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    /// Duplicate id, unknown id, or a closed desk actor.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Availability text other than `Si` or `No`.
    #[error("Invalid availability: {0:?} (expected \"Si\" or \"No\")")]
    InvalidAvailability(String),

    #[error("Food name too long: {0} characters")]
    NameTooLong(usize),

    #[error("Invalid food price: {0}")]
    InvalidPrice(f64),
}

impl FoodError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Table(TableError::DuplicateKey(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Table(TableError::NotFound(_)))
    }
}
