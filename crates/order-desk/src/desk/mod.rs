//! # Order Desk
//!
//! [`OrderDesk`] is the application context: the four stores, created together and passed
//! around by reference. The stores are public fields; operations that validate one store
//! against another are also offered here so callers do not have to split the borrows
//! themselves.

pub mod config;
pub mod request;

pub use config::*;
pub use request::*;

use crate::client_store::ClientStore;
use crate::food_store::FoodStore;
use crate::menu_store::{MenuError, MenuStore};
use crate::model::{Menu, MenuCreate, MenuUpdate, Order, OrderCreate, OrderStatus};
use crate::order_store::{OrderError, OrderRefs, OrderStore};
use tracing::info;

#[derive(Debug, Clone)]
pub struct OrderDesk {
    pub foods: FoodStore,
    pub clients: ClientStore,
    pub menus: MenuStore,
    pub orders: OrderStore,
}

/// Record counts of a released desk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Released {
    pub foods: usize,
    pub clients: usize,
    pub menus: usize,
    pub orders: usize,
}

impl OrderDesk {
    pub fn new() -> Self {
        Self::with_config(&DeskConfig::default())
    }

    /// # Panics
    /// Panics if `config.bucket_count` is zero.
    pub fn with_config(config: &DeskConfig) -> Self {
        let workers = config.search_workers;
        Self {
            foods: FoodStore::new(config.bucket_count).with_search_workers(workers),
            clients: ClientStore::new(config.bucket_count).with_search_workers(workers),
            menus: MenuStore::new(config.bucket_count).with_search_workers(workers),
            orders: OrderStore::new(config.bucket_count).with_search_workers(workers),
        }
    }

    /// Adds a menu validated against this desk's foods.
    pub fn add_menu(&mut self, id: i32, params: MenuCreate) -> Result<i32, MenuError> {
        self.menus.insert(id, params, &self.foods)
    }

    pub fn update_menu(&mut self, id: i32, update: MenuUpdate) -> Result<&Menu, MenuError> {
        self.menus.update(id, update, &self.foods)
    }

    /// Adds an order validated against this desk's clients and menus.
    pub fn add_order(&mut self, id: i32, params: OrderCreate) -> Result<i32, OrderError> {
        let refs = OrderRefs {
            clients: &self.clients,
            menus: &self.menus,
        };
        self.orders.insert(id, params, refs)
    }

    pub fn update_order_status(
        &mut self,
        id: i32,
        status: OrderStatus,
    ) -> Result<&Order, OrderError> {
        let refs = OrderRefs {
            clients: &self.clients,
            menus: &self.menus,
        };
        self.orders.update(id, status, refs)
    }

    /// Releases every table.
    pub fn release(self) -> Released {
        let released = Released {
            foods: self.foods.release(),
            clients: self.clients.release(),
            menus: self.menus.release(),
            orders: self.orders.release(),
        };
        info!(?released, "Desk released");
        released
    }
}

impl Default for OrderDesk {
    fn default() -> Self {
        Self::new()
    }
}
