use crate::order_store::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A client's order for one or more menus.
///
/// # Table Framework
/// Implemented as a [`TableEntity`](table_framework::TableEntity) in
/// [`order_store::entity`](crate::order_store::entity). Creation checks that the client and
/// every menu exist; afterwards only the [`OrderStatus`] can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub client_id: i32,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub menus: Vec<i32>,
    pub status: OrderStatus,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID={}, Client={}, Date={}, Status={}]",
            self.id, self.client_id, self.date, self.status
        )
    }
}

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// The label stored in listings and in the exported document.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En Proceso",
            Self::Completed => "Completado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .ok_or_else(|| OrderError::InvalidStatus(label.to_string()))
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub client_id: i32,
    pub date: String,
    pub menus: Vec<i32>,
    pub status: OrderStatus,
}

impl OrderCreate {
    pub fn new(
        client_id: i32,
        date: impl Into<String>,
        menus: Vec<i32>,
        status: OrderStatus,
    ) -> Self {
        Self {
            client_id,
            date: date.into(),
            menus,
            status,
        }
    }
}

/// Orders only change status after creation.
pub type OrderUpdate = OrderStatus;
