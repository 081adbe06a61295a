//! Error types for the client store.

use table_framework::TableError;
use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Client name too long: {0} characters")]
    NameTooLong(usize),

    #[error("Client phone too long: {0} characters")]
    PhoneTooLong(usize),
}

impl ClientError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Table(TableError::DuplicateKey(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Table(TableError::NotFound(_)))
    }
}
