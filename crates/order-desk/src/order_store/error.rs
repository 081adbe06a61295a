//! Error types for the order store.

use table_framework::TableError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error(transparent)]
    Table(#[from] TableError),

    /// The order's client id is not in the client store.
    #[error("Client not found: {0}")]
    ClientNotFound(i32),

    /// A listed menu id is not in the menu store.
    #[error("Menu not found: {0}")]
    MenuNotFound(i32),

    #[error("Invalid order status: {0:?}")]
    InvalidStatus(String),

    #[error("Invalid order date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

impl OrderError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Table(TableError::DuplicateKey(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Table(TableError::NotFound(_)))
    }
}
