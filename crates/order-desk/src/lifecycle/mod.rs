//! # System Lifecycle
//!
//! Starts the desk actor, hands out its typed handles, and shuts it down.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles** - closes the sender side of the channel
//! 2. **Actor drains** - requests already queued are still processed
//! 3. **Await completion** - the task resolves to the final [`OrderDesk`]
//!
//! Clones of the handles held elsewhere keep the channel open, and `shutdown` waits for them.

use crate::desk::{DeskConfig, OrderDesk};
use crate::handles::{ClientHandle, FoodHandle, MenuHandle, OrderHandle};
use table_framework::TableActor;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The single-writer actor that owns an [`OrderDesk`].
pub type DeskActor = TableActor<OrderDesk>;

#[derive(Debug, Error)]
pub enum SystemError {
    /// The actor task panicked or was cancelled; the desk is lost.
    #[error("Desk actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// A running desk actor plus one handle per record kind.
///
/// # Example
///
/// ```rust
/// use order_desk::desk::{DeskConfig, OrderDesk};
/// use order_desk::lifecycle::DeskSystem;
/// use order_desk::model::FoodCreate;
/// use table_framework::ActorClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let system = DeskSystem::start(OrderDesk::new(), &DeskConfig::default());
/// system.foods.insert(1, FoodCreate::new("Taco", 2.5, true)).await?;
/// assert_eq!(system.foods.count().await?, 1);
///
/// let desk = system.shutdown().await?;
/// assert_eq!(desk.foods.count(), 1);
/// # Ok(())
/// # }
/// ```
pub struct DeskSystem {
    pub foods: FoodHandle,
    pub clients: ClientHandle,
    pub menus: MenuHandle,
    pub orders: OrderHandle,
    handle: JoinHandle<OrderDesk>,
}

impl DeskSystem {
    /// Spawns the actor on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics outside a Tokio runtime, or if `config.channel_capacity` is zero.
    pub fn start(desk: OrderDesk, config: &DeskConfig) -> Self {
        let (actor, sender) = DeskActor::new(desk, config.channel_capacity);
        let handle = tokio::spawn(actor.run());
        let workers = config.search_workers;
        info!(
            channel_capacity = config.channel_capacity,
            search_workers = workers,
            "Desk system started"
        );

        Self {
            foods: FoodHandle::new(sender.clone(), workers),
            clients: ClientHandle::new(sender.clone(), workers),
            menus: MenuHandle::new(sender.clone(), workers),
            orders: OrderHandle::new(sender, workers),
            handle,
        }
    }

    /// Closes the channel, waits for queued requests, and returns the desk.
    pub async fn shutdown(self) -> Result<OrderDesk, SystemError> {
        info!("Shutting down desk system...");
        let Self {
            foods,
            clients,
            menus,
            orders,
            handle,
        } = self;
        drop((foods, clients, menus, orders));

        let desk = handle.await.map_err(|e| {
            error!(error = %e, "Desk actor task failed");
            SystemError::from(e)
        })?;
        info!("Desk system shutdown complete.");
        Ok(desk)
    }
}
