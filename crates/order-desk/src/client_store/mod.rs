//! # Client Store
//!
//! Keyed collection of [`Client`] records. Orders check client ids against this store.
//!
//! - [`entity`] - [`TableEntity`](table_framework::TableEntity) implementation for [`Client`]
//! - [`error`] - [`ClientError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Client, ClientCreate, ClientUpdate};
use std::collections::VecDeque;
use table_framework::hashing::DEFAULT_BUCKETS;
use table_framework::search::default_workers;
use table_framework::{HashTable, SortedSnapshot};

#[derive(Debug, Clone)]
pub struct ClientStore {
    table: HashTable<Client>,
    search_workers: usize,
}

impl ClientStore {
    /// # Panics
    /// Panics if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        Self {
            table: HashTable::new(bucket_count),
            search_workers: default_workers(),
        }
    }

    pub fn with_search_workers(mut self, workers: usize) -> Self {
        self.search_workers = workers.max(1);
        self
    }

    pub fn insert(&mut self, id: i32, params: ClientCreate) -> Result<i32, ClientError> {
        self.table.insert(id, params, ())
    }

    pub fn find(&self, id: i32) -> Option<&Client> {
        self.table.get(id)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.table.contains(id)
    }

    pub fn update(&mut self, id: i32, update: ClientUpdate) -> Result<&Client, ClientError> {
        self.table.update(id, update, ())
    }

    /// Removes the client. Orders placed by it keep the id.
    pub fn delete(&mut self, id: i32) -> Result<Client, ClientError> {
        self.table.remove(id)
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.table.iter()
    }

    pub fn snapshot(&self) -> Vec<Client> {
        self.table.snapshot()
    }

    pub fn bucket_chains(&self) -> impl Iterator<Item = (usize, &VecDeque<Client>)> {
        self.table.chains()
    }

    pub fn sorted_by_id(&self) -> SortedSnapshot<Client> {
        self.table
            .sorted_by_key()
            .with_workers(self.search_workers)
    }

    pub fn search_by_id(&self, id: i32) -> Option<Client> {
        self.sorted_by_id().find(id).cloned()
    }

    pub fn release(self) -> usize {
        self.table.release()
    }

    pub(crate) fn table_mut(&mut self) -> &mut HashTable<Client> {
        &mut self.table
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}
