use crate::desk::DeskRequest;
use crate::food_store::FoodError;
use crate::model::{Food, FoodCreate, FoodUpdate};
use async_trait::async_trait;
use table_framework::{parallel_quicksort, run_blocking, ActorClient, ResourceClient};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Handle for the desk's food table.
#[derive(Clone)]
pub struct FoodHandle {
    inner: ResourceClient<Food, DeskRequest>,
    search_workers: usize,
}

impl FoodHandle {
    pub fn new(sender: mpsc::Sender<DeskRequest>, search_workers: usize) -> Self {
        Self {
            inner: ResourceClient::new(sender),
            search_workers: search_workers.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, id: i32, params: FoodCreate) -> Result<i32, FoodError> {
        debug!("insert called");
        self.inner.insert(id, params).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, update: FoodUpdate) -> Result<Food, FoodError> {
        self.inner.update(id, update).await
    }

    /// Snapshot ordered by ascending price.
    pub async fn sorted_by_price(&self) -> Result<Vec<Food>, FoodError> {
        let mut foods = self.inner.snapshot().await?;
        let sorted = run_blocking(move || {
            parallel_quicksort(&mut foods, |food| food.price);
            foods
        })
        .await?;
        Ok(sorted)
    }
}

#[async_trait]
impl ActorClient<Food, DeskRequest> for FoodHandle {
    fn inner(&self) -> &ResourceClient<Food, DeskRequest> {
        &self.inner
    }

    fn search_workers(&self) -> usize {
        self.search_workers
    }
}
