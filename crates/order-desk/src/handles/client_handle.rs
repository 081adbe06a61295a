use crate::client_store::ClientError;
use crate::desk::DeskRequest;
use crate::model::{Client, ClientCreate, ClientUpdate};
use async_trait::async_trait;
use table_framework::{ActorClient, ResourceClient};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Handle for the desk's client table.
#[derive(Clone)]
pub struct ClientHandle {
    inner: ResourceClient<Client, DeskRequest>,
    search_workers: usize,
}

impl ClientHandle {
    pub fn new(sender: mpsc::Sender<DeskRequest>, search_workers: usize) -> Self {
        Self {
            inner: ResourceClient::new(sender),
            search_workers: search_workers.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, id: i32, params: ClientCreate) -> Result<i32, ClientError> {
        debug!("insert called");
        self.inner.insert(id, params).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, update: ClientUpdate) -> Result<Client, ClientError> {
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl ActorClient<Client, DeskRequest> for ClientHandle {
    fn inner(&self) -> &ResourceClient<Client, DeskRequest> {
        &self.inner
    }

    fn search_workers(&self) -> usize {
        self.search_workers
    }
}
