use crate::desk::DeskRequest;
use crate::model::{Order, OrderCreate, OrderStatus};
use crate::order_store::OrderError;
use async_trait::async_trait;
use table_framework::{ActorClient, ResourceClient};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Handle for the desk's order table.
#[derive(Clone)]
pub struct OrderHandle {
    inner: ResourceClient<Order, DeskRequest>,
    search_workers: usize,
}

impl OrderHandle {
    pub fn new(sender: mpsc::Sender<DeskRequest>, search_workers: usize) -> Self {
        Self {
            inner: ResourceClient::new(sender),
            search_workers: search_workers.max(1),
        }
    }

    /// Places an order. Client and menus are checked inside the actor.
    #[instrument(skip(self))]
    pub async fn insert(&self, id: i32, params: OrderCreate) -> Result<i32, OrderError> {
        debug!("insert called");
        self.inner.insert(id, params).await
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<Order, OrderError> {
        self.inner.update(id, status).await
    }
}

#[async_trait]
impl ActorClient<Order, DeskRequest> for OrderHandle {
    fn inner(&self) -> &ResourceClient<Order, DeskRequest> {
        &self.inner
    }

    fn search_workers(&self) -> usize {
        self.search_workers
    }
}
