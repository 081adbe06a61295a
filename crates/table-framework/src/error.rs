//! # Framework Errors
//!
//! Failures raised by the tables and the request plumbing themselves, independent of any
//! record kind. Every entity error type converts from [`TableError`] so these surface
//! through the entity's own error enum.

/// Errors that can occur within the table framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Insert rejected: a record with this key already exists. The stored record is untouched.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    /// Update, delete or lookup on a key that is not stored.
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// A sort or search moved off the async runtime panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(String),
}
