//! # Menu Store
//!
//! Keyed collection of [`Menu`] records. Writes are validated against a [`FoodStore`]
//! passed in by the caller, so the store never holds on to the foods it checked.
//!
//! ## Usage
//!
//! ```rust
//! use order_desk::food_store::FoodStore;
//! use order_desk::menu_store::{MenuError, MenuStore, ResolvedFood};
//! use order_desk::model::{FoodCreate, MenuCreate};
//!
//! let mut foods = FoodStore::default();
//! let mut menus = MenuStore::default();
//! foods.insert(1, FoodCreate::new("Taco", 2.5, true)).unwrap();
//!
//! menus.insert(10, MenuCreate::new("2024-01-01", vec![1]), &foods).unwrap();
//! assert_eq!(
//!     menus.insert(11, MenuCreate::new("2024-01-01", vec![2]), &foods),
//!     Err(MenuError::FoodNotFound(2))
//! );
//!
//! // Deleting a food does not touch the menus that list it.
//! foods.delete(1).unwrap();
//! let menu = menus.find(10).unwrap();
//! assert_eq!(menu.foods, vec![1]);
//! assert_eq!(menu.resolve_foods(&foods), vec![ResolvedFood::Missing(1)]);
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::food_store::FoodStore;
use crate::model::{Food, Menu, MenuCreate, MenuUpdate};
use std::collections::VecDeque;
use table_framework::hashing::DEFAULT_BUCKETS;
use table_framework::search::default_workers;
use table_framework::{HashTable, SortedSnapshot};

/// A food id from a menu, looked up in the food store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedFood<'a> {
    Found(&'a Food),
    /// The id no longer names a food.
    Missing(i32),
}

impl Menu {
    /// Looks up every listed food id, in list order.
    pub fn resolve_foods<'a>(&self, foods: &'a FoodStore) -> Vec<ResolvedFood<'a>> {
        self.foods
            .iter()
            .map(|&id| foods.find(id).map_or(ResolvedFood::Missing(id), ResolvedFood::Found))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct MenuStore {
    table: HashTable<Menu>,
    search_workers: usize,
}

impl MenuStore {
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

    /// Adds a menu. Fails if the id is taken, the date is malformed, or any listed food is
    /// missing or unavailable in `foods`.
    pub fn insert(
        &mut self,
        id: i32,
        params: MenuCreate,
        foods: &FoodStore,
    ) -> Result<i32, MenuError> {
        self.table.insert(id, params, foods)
    }

    pub fn find(&self, id: i32) -> Option<&Menu> {
        self.table.get(id)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.table.contains(id)
    }

    /// Replaces date and food list, validated the same way as [`insert`](Self::insert).
    pub fn update(
        &mut self,
        id: i32,
        update: MenuUpdate,
        foods: &FoodStore,
    ) -> Result<&Menu, MenuError> {
        self.table.update(id, update, foods)
    }

    /// Removes the menu. Orders listing it keep the id.
    pub fn delete(&mut self, id: i32) -> Result<Menu, MenuError> {
        self.table.remove(id)
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Menu> {
        self.table.iter()
    }

    pub fn snapshot(&self) -> Vec<Menu> {
        self.table.snapshot()
    }

    pub fn bucket_chains(&self) -> impl Iterator<Item = (usize, &VecDeque<Menu>)> {
        self.table.chains()
    }

    pub fn sorted_by_id(&self) -> SortedSnapshot<Menu> {
        self.table
            .sorted_by_key()
            .with_workers(self.search_workers)
    }

    pub fn search_by_id(&self, id: i32) -> Option<Menu> {
        self.sorted_by_id().find(id).cloned()
    }

    pub fn release(self) -> usize {
        self.table.release()
    }

    pub(crate) fn table_mut(&mut self) -> &mut HashTable<Menu> {
        &mut self.table
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}
