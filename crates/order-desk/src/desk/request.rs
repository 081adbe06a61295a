//! Messages accepted by the desk actor.

use super::OrderDesk;
use crate::model::{Client, Food, Menu, Order};
use crate::order_store::OrderRefs;
use table_framework::{serve, Dispatch, ResourceRequest};

/// One request against one of the desk's four tables.
#[derive(Debug)]
pub enum DeskRequest {
    Food(ResourceRequest<Food>),
    Client(ResourceRequest<Client>),
    Menu(ResourceRequest<Menu>),
    Order(ResourceRequest<Order>),
}

impl From<ResourceRequest<Food>> for DeskRequest {
    fn from(request: ResourceRequest<Food>) -> Self {
        Self::Food(request)
    }
}

impl From<ResourceRequest<Client>> for DeskRequest {
    fn from(request: ResourceRequest<Client>) -> Self {
        Self::Client(request)
    }
}

impl From<ResourceRequest<Menu>> for DeskRequest {
    fn from(request: ResourceRequest<Menu>) -> Self {
        Self::Menu(request)
    }
}

impl From<ResourceRequest<Order>> for DeskRequest {
    fn from(request: ResourceRequest<Order>) -> Self {
        Self::Order(request)
    }
}

impl Dispatch for OrderDesk {
    type Request = DeskRequest;

    fn dispatch(&mut self, request: DeskRequest) {
        match request {
            DeskRequest::Food(request) => serve(self.foods.table_mut(), (), request),
            DeskRequest::Client(request) => serve(self.clients.table_mut(), (), request),
            DeskRequest::Menu(request) => serve(self.menus.table_mut(), &self.foods, request),
            DeskRequest::Order(request) => {
                let refs = OrderRefs {
                    clients: &self.clients,
                    menus: &self.menus,
                };
                serve(self.orders.table_mut(), refs, request)
            }
        }
    }
}
