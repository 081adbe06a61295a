//! # Food Store
//!
//! Keyed collection of [`Food`] records. Foods depend on nothing; menus validate against
//! this store.
//!
//! ## Structure
//!
//! - [`entity`] - [`TableEntity`](table_framework::TableEntity) implementation for [`Food`]
//! - [`error`] - [`FoodError`] type for type-safe error handling
//! - [`FoodStore`] - the table plus its sort/search entry points
//!
//! ## Usage
//!
//! ```rust
//! use order_desk::food_store::FoodStore;
//! use order_desk::model::FoodCreate;
//!
//! let mut foods = FoodStore::default();
//! foods.insert(1, FoodCreate::new("Taco", 2.5, true)).unwrap();
//! assert!(foods.insert(1, FoodCreate::new("Torta", 4.0, true)).unwrap_err().is_duplicate());
//! assert_eq!(foods.find(1).map(|f| f.name.as_str()), Some("Taco"));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Food, FoodCreate, FoodUpdate};
use std::collections::VecDeque;
use table_framework::hashing::DEFAULT_BUCKETS;
use table_framework::search::default_workers;
use table_framework::{parallel_quicksort, HashTable, SortedSnapshot};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FoodStore {
    table: HashTable<Food>,
    search_workers: usize,
}

impl FoodStore {
    /// Creates an empty store.
    ///
    /// # Panics
    /// Panics if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        Self {
            table: HashTable::new(bucket_count),
            search_workers: default_workers(),
        }
    }

    /// Number of workers used by [`search_by_id`](Self::search_by_id).
    pub fn with_search_workers(mut self, workers: usize) -> Self {
        self.search_workers = workers.max(1);
        self
    }

    pub fn insert(&mut self, id: i32, params: FoodCreate) -> Result<i32, FoodError> {
        self.table.insert(id, params, ())
    }

    pub fn find(&self, id: i32) -> Option<&Food> {
        self.table.get(id)
    }

    pub fn update(&mut self, id: i32, update: FoodUpdate) -> Result<&Food, FoodError> {
        self.table.update(id, update, ())
    }

    /// Removes the food. Menus listing it keep the id.
    pub fn delete(&mut self, id: i32) -> Result<Food, FoodError> {
        self.table.remove(id)
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Records in bucket order, then most recent first within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.table.iter()
    }

    pub fn snapshot(&self) -> Vec<Food> {
        self.table.snapshot()
    }

    /// Non-empty buckets and their chains.
    pub fn bucket_chains(&self) -> impl Iterator<Item = (usize, &VecDeque<Food>)> {
        self.table.chains()
    }

    pub fn sorted_by_id(&self) -> SortedSnapshot<Food> {
        self.table
            .sorted_by_key()
            .with_workers(self.search_workers)
    }

    /// Snapshot ordered by ascending price. Foods with the same price come in no fixed order.
    pub fn sorted_by_price(&self) -> Vec<Food> {
        let mut foods = self.snapshot();
        debug!(size = foods.len(), "Sorting foods by price");
        parallel_quicksort(&mut foods, |food| food.price);
        foods
    }

    /// Sorts a snapshot by id and binary-searches it in parallel.
    pub fn search_by_id(&self, id: i32) -> Option<Food> {
        self.sorted_by_id().find(id).cloned()
    }

    /// Drops every record, returning how many there were.
    pub fn release(self) -> usize {
        self.table.release()
    }

    pub(crate) fn table_mut(&mut self) -> &mut HashTable<Food> {
        &mut self.table
    }
}

impl Default for FoodStore {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}
