//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! a [`ResourceClient`](crate::ResourceClient) and the actor that owns the tables.

use crate::entity::TableEntity;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<R, E> = oneshot::Sender<Result<R, E>>;

/// Request against one table, sent to the actor that owns it.
///
/// # The CRUD Pattern
/// The variants map to the operations every store supports:
///
/// - **Insert**: Lifecycle start. The caller chooses the key; [`TableEntity::Create`]
///   carries the fields.
/// - **Get**: Retrieval by key.
/// - **Update**: State mutation with [`TableEntity::Update`].
/// - **Delete**: Lifecycle end. Returns the removed record.
/// - **Snapshot** / **Count**: Reporting.
///
/// Replies carry the entity's own error type, so a menu request can only ever fail
/// with a `MenuError`.
#[derive(Debug)]
pub enum ResourceRequest<T: TableEntity> {
    Insert {
        key: T::Key,
        params: T::Create,
        respond_to: Response<T::Key, T::Error>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>, T::Error>,
    },
    Update {
        key: T::Key,
        update: T::Update,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        key: T::Key,
        respond_to: Response<T, T::Error>,
    },
    Snapshot {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Count {
        respond_to: Response<usize, T::Error>,
    },
}
