//! # Generic Client
//!
//! This module defines the generic client for sending table requests to an actor.

use crate::entity::TableEntity;
use crate::error::TableError;
use crate::message::{ResourceRequest, Response};
use std::marker::PhantomData;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T, M>` provides a type‑safe, async API for the table of `T` records
/// owned by an actor. One actor usually owns several tables, so requests are wrapped into the
/// actor's message type `M` (any type that converts from [`ResourceRequest<T>`]) before they
/// are sent. Results come back over oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Typed errors** – every method returns the entity's own error type.
pub struct ResourceClient<T: TableEntity, M> {
    sender: mpsc::Sender<M>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: TableEntity, M> Clone for ResourceClient<T, M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T, M> ResourceClient<T, M>
where
    T: TableEntity,
    M: From<ResourceRequest<T>> + Send,
{
    pub fn new(sender: mpsc::Sender<M>) -> Self {
        Self {
            sender,
            _entity: PhantomData,
        }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(M::from(build(respond_to)))
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }

    pub async fn insert(&self, key: T::Key, params: T::Create) -> Result<T::Key, T::Error> {
        self.request(|respond_to| ResourceRequest::Insert {
            key,
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { key, respond_to })
            .await
    }

    pub async fn update(&self, key: T::Key, update: T::Update) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Update {
            key,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, key: T::Key) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Delete { key, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<Vec<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Snapshot { respond_to })
            .await
    }

    pub async fn count(&self) -> Result<usize, T::Error> {
        self.request(|respond_to| ResourceRequest::Count { respond_to })
            .await
    }
}
