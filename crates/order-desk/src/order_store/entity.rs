//! TableEntity implementation for the Order domain type.
//!
//! The context is [`OrderRefs`]: the client and menu stores an order points into.
//! Menus only need to exist; their foods are not re-checked.

use super::{OrderError, OrderRefs};
use crate::model::fields::is_calendar_date;
use crate::model::{Order, OrderCreate, OrderUpdate};
use table_framework::{hashing, TableEntity};

impl TableEntity for Order {
    type Key = i32;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context<'a> = OrderRefs<'a>;
    type Error = OrderError;

    fn key(&self) -> i32 {
        self.id
    }

    fn bucket_index(key: i32, bucket_count: usize) -> usize {
        hashing::modulo(key, bucket_count)
    }

    fn from_create_params(id: i32, params: OrderCreate) -> Result<Self, OrderError> {
        if !is_calendar_date(&params.date) {
            return Err(OrderError::InvalidDate(params.date));
        }
        Ok(Self {
            id,
            client_id: params.client_id,
            date: params.date,
            menus: params.menus,
            status: params.status,
        })
    }

    fn on_create(&self, refs: Self::Context<'_>) -> Result<(), OrderError> {
        if !refs.clients.contains(self.client_id) {
            return Err(OrderError::ClientNotFound(self.client_id));
        }
        match self.menus.iter().find(|&&id| !refs.menus.contains(id)) {
            Some(&missing) => Err(OrderError::MenuNotFound(missing)),
            None => Ok(()),
        }
    }

    /// Only the status changes after creation.
    fn on_update(&mut self, status: OrderUpdate, _refs: Self::Context<'_>) -> Result<(), OrderError> {
        self.status = status;
        Ok(())
    }
}
