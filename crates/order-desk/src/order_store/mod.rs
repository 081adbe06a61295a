//! # Order Store
//!
//! Keyed collection of [`Order`] records. An order is accepted only when its client and
//! every listed menu exist at that moment; see [`OrderRefs`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::client_store::ClientStore;
use crate::menu_store::MenuStore;
use crate::model::{Order, OrderCreate, OrderStatus};
use std::collections::VecDeque;
use table_framework::hashing::DEFAULT_BUCKETS;
use table_framework::search::default_workers;
use table_framework::{HashTable, SortedSnapshot};

/// The stores an order's ids point into.
#[derive(Debug, Clone, Copy)]
pub struct OrderRefs<'a> {
    pub clients: &'a ClientStore,
    pub menus: &'a MenuStore,
}

#[derive(Debug, Clone)]
pub struct OrderStore {
    table: HashTable<Order>,
    search_workers: usize,
}

impl OrderStore {
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

    /// Adds an order. Fails if the id is taken, the date is malformed, the client is unknown,
    /// or any listed menu is unknown.
    pub fn insert(
        &mut self,
        id: i32,
        params: OrderCreate,
        refs: OrderRefs<'_>,
    ) -> Result<i32, OrderError> {
        self.table.insert(id, params, refs)
    }

    pub fn find(&self, id: i32) -> Option<&Order> {
        self.table.get(id)
    }

    /// Sets the order's status.
    pub fn update(
        &mut self,
        id: i32,
        status: OrderStatus,
        refs: OrderRefs<'_>,
    ) -> Result<&Order, OrderError> {
        self.table.update(id, status, refs)
    }

    pub fn delete(&mut self, id: i32) -> Result<Order, OrderError> {
        self.table.remove(id)
    }

    pub fn count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.table.iter()
    }

    pub fn snapshot(&self) -> Vec<Order> {
        self.table.snapshot()
    }

    pub fn bucket_chains(&self) -> impl Iterator<Item = (usize, &VecDeque<Order>)> {
        self.table.chains()
    }

    pub fn sorted_by_id(&self) -> SortedSnapshot<Order> {
        self.table
            .sorted_by_key()
            .with_workers(self.search_workers)
    }

    pub fn search_by_id(&self, id: i32) -> Option<Order> {
        self.sorted_by_id().find(id).cloned()
    }

    pub fn release(self) -> usize {
        self.table.release()
    }

    pub(crate) fn table_mut(&mut self) -> &mut HashTable<Order> {
        &mut self.table
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food_store::FoodStore;
    use crate::model::{ClientCreate, FoodCreate, MenuCreate};

    struct Fixture {
        clients: ClientStore,
        menus: MenuStore,
        orders: OrderStore,
    }

    impl Fixture {
        fn new() -> Self {
            let mut foods = FoodStore::default();
            foods.insert(1, FoodCreate::new("Taco", 2.5, true)).unwrap();
            let mut menus = MenuStore::default();
            menus.insert(10, MenuCreate::new("2024-01-01", vec![1]), &foods).unwrap();
            menus.insert(11, MenuCreate::new("2024-01-02", vec![1]), &foods).unwrap();
            let mut clients = ClientStore::default();
            clients.insert(5, ClientCreate::new("Ana", "5512345678")).unwrap();
            Self {
                clients,
                menus,
                orders: OrderStore::default(),
            }
        }

        fn add(&mut self, id: i32, params: OrderCreate) -> Result<i32, OrderError> {
            let refs = OrderRefs {
                clients: &self.clients,
                menus: &self.menus,
            };
            self.orders.insert(id, params, refs)
        }
    }

    #[test]
    fn valid_order_is_retrievable() {
        let mut fx = Fixture::new();
        let params = OrderCreate::new(5, "2024-02-02", vec![10, 11], OrderStatus::Pending);
        assert_eq!(fx.add(3, params.clone()), Ok(3));
        let order = fx.orders.find(3).unwrap();
        assert_eq!(order.client_id, 5);
        assert_eq!(order.menus, vec![10, 11]);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(fx.add(3, params).unwrap_err().is_duplicate());
    }

    #[test]
    fn unknown_client_or_menu_is_rejected() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.add(1, OrderCreate::new(6, "2024-02-02", vec![10], OrderStatus::Pending)),
            Err(OrderError::ClientNotFound(6))
        );
        assert_eq!(
            fx.add(1, OrderCreate::new(5, "2024-02-02", vec![10, 12], OrderStatus::Pending)),
            Err(OrderError::MenuNotFound(12))
        );
        assert_eq!(
            fx.add(1, OrderCreate::new(5, "02-02-2024", vec![10], OrderStatus::Pending)),
            Err(OrderError::InvalidDate("02-02-2024".into()))
        );
        assert_eq!(fx.orders.count(), 0);
    }

    #[test]
    fn status_update_and_delete() {
        let mut fx = Fixture::new();
        fx.add(3, OrderCreate::new(5, "2024-02-02", vec![10], OrderStatus::Pending))
            .unwrap();
        let refs = OrderRefs {
            clients: &fx.clients,
            menus: &fx.menus,
        };
        let updated = fx.orders.update(3, OrderStatus::Completed, refs).unwrap();
        assert_eq!(updated.status, OrderStatus::Completed);
        assert!(fx
            .orders
            .update(4, OrderStatus::Completed, refs)
            .unwrap_err()
            .is_not_found());

        assert_eq!(fx.orders.delete(3).unwrap().status, OrderStatus::Completed);
        assert!(fx.orders.delete(3).unwrap_err().is_not_found());
    }

    #[test]
    fn deleting_a_client_keeps_its_orders() {
        let mut fx = Fixture::new();
        fx.add(3, OrderCreate::new(5, "2024-02-02", vec![10], OrderStatus::Pending))
            .unwrap();
        fx.clients.delete(5).unwrap();
        assert_eq!(fx.orders.find(3).unwrap().client_id, 5);
        assert_eq!(fx.orders.search_by_id(3).map(|o| o.client_id), Some(5));
    }
}
