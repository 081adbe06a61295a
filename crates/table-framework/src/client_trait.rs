//! # ActorClient Trait
//!
//! Provides a common interface for entity-specific handles, adding default `get`, `delete`,
//! `snapshot`, `count`, `sorted_by_key` and `search_by_key` methods built on top of a generic
//! [`ResourceClient`]. Handles only write the methods whose arguments are specific to their
//! entity (insert and update).
//!
//! Sorting and searching happen on the caller's side, on Tokio's blocking pool.
use crate::search::{default_workers, run_blocking, SortedSnapshot};
use crate::{ResourceClient, ResourceRequest, TableEntity};
use async_trait::async_trait;

/// Trait for entity-specific handles to inherit the standard operations.
#[async_trait]
pub trait ActorClient<T, M>: Send + Sync
where
    T: TableEntity,
    M: From<ResourceRequest<T>> + Send + 'static,
{
    fn inner(&self) -> &ResourceClient<T, M>;

    /// Workers for the parallel binary search.
    fn search_workers(&self) -> usize {
        default_workers()
    }

    async fn get(&self, key: T::Key) -> Result<Option<T>, T::Error> {
        self.inner().get(key).await
    }

    async fn delete(&self, key: T::Key) -> Result<T, T::Error> {
        self.inner().delete(key).await
    }

    async fn snapshot(&self) -> Result<Vec<T>, T::Error> {
        self.inner().snapshot().await
    }

    async fn count(&self) -> Result<usize, T::Error> {
        self.inner().count().await
    }

    /// Snapshot from the actor, sorted by key on the caller's side.
    async fn sorted_by_key(&self) -> Result<SortedSnapshot<T>, T::Error> {
        let items = self.inner().snapshot().await?;
        let workers = self.search_workers();
        let sorted =
            run_blocking(move || SortedSnapshot::by_key(items).with_workers(workers)).await?;
        Ok(sorted)
    }

    /// Snapshot, sort, then parallel binary search for `key`.
    async fn search_by_key(&self, key: T::Key) -> Result<Option<T>, T::Error> {
        let sorted = self.sorted_by_key().await?;
        let found = run_blocking(move || sorted.find(key).cloned()).await?;
        Ok(found)
    }
}
