use crate::desk::DeskRequest;
use crate::menu_store::MenuError;
use crate::model::{Menu, MenuCreate, MenuUpdate};
use async_trait::async_trait;
use table_framework::{ActorClient, ResourceClient};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Handle for the desk's menu table.
///
/// Food references are validated inside the actor against the food table as it is when
/// the request is processed.
#[derive(Clone)]
pub struct MenuHandle {
    inner: ResourceClient<Menu, DeskRequest>,
    search_workers: usize,
}

impl MenuHandle {
    pub fn new(sender: mpsc::Sender<DeskRequest>, search_workers: usize) -> Self {
        Self {
            inner: ResourceClient::new(sender),
            search_workers: search_workers.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, id: i32, params: MenuCreate) -> Result<i32, MenuError> {
        debug!("insert called");
        self.inner.insert(id, params).await
    }

    /// Replaces date and food list.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, update: MenuUpdate) -> Result<Menu, MenuError> {
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl ActorClient<Menu, DeskRequest> for MenuHandle {
    fn inner(&self) -> &ResourceClient<Menu, DeskRequest> {
        &self.inner
    }

    fn search_workers(&self) -> usize {
        self.search_workers
    }
}
