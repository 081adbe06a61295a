//! # Single-Writer Actor
//!
//! The tables themselves have no locks: mutation needs `&mut`. When several tasks want to
//! write, `TableActor` gives them one owner. It holds the state (usually several related
//! tables), receives requests over a bounded channel, and applies them one at a time.
//!
//! [`serve`] is the generic half of the message loop: it executes one
//! [`ResourceRequest`] against one table and replies on the request's oneshot channel.
//! The state decides which table a request goes to and which context it is validated
//! against, by implementing [`Dispatch`].

use crate::entity::{entity_name, TableEntity};
use crate::message::ResourceRequest;
use crate::table::HashTable;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// State owned by a [`TableActor`].
pub trait Dispatch: Send + 'static {
    /// Message type accepted by the actor.
    type Request: Send + 'static;

    /// Applies one request. Runs with exclusive access to the state.
    fn dispatch(&mut self, request: Self::Request);
}

/// Executes `request` against `table`, validating references through `ctx`.
///
/// A dropped reply channel only means the caller stopped waiting; the table change
/// (if any) still stands.
pub fn serve<T: TableEntity>(
    table: &mut HashTable<T>,
    ctx: T::Context<'_>,
    request: ResourceRequest<T>,
) {
    match request {
        ResourceRequest::Insert {
            key,
            params,
            respond_to,
        } => {
            let _ = respond_to.send(table.insert(key, params, ctx));
        }
        ResourceRequest::Get { key, respond_to } => {
            let item = table.get(key).cloned();
            debug!(entity_type = entity_name::<T>(), %key, found = item.is_some(), "Get");
            let _ = respond_to.send(Ok(item));
        }
        ResourceRequest::Update {
            key,
            update,
            respond_to,
        } => {
            let _ = respond_to.send(table.update(key, update, ctx).cloned());
        }
        ResourceRequest::Delete { key, respond_to } => {
            let _ = respond_to.send(table.remove(key));
        }
        ResourceRequest::Snapshot { respond_to } => {
            let _ = respond_to.send(Ok(table.snapshot()));
        }
        ResourceRequest::Count { respond_to } => {
            let _ = respond_to.send(Ok(table.len()));
        }
    }
}

/// The actor that serializes every write to its state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `TableActor::new(state, capacity)` returns the actor and the sender that
///     clients wrap.
/// 2.  **Run**: spawn `actor.run()` on the runtime.
/// 3.  **Stop**: drop every sender. The loop drains what is queued, then `run` resolves to
///     the final state.
pub struct TableActor<S: Dispatch> {
    receiver: mpsc::Receiver<S::Request>,
    state: S,
}

impl<S: Dispatch> TableActor<S> {
    /// Creates the actor and the sending half of its channel.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC channel. When it is full, senders wait.
    ///
    /// # Panics
    /// Panics if `buffer_size` is zero (tokio rejects zero-capacity channels).
    pub fn new(state: S, buffer_size: usize) -> (Self, mpsc::Sender<S::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver, state }, sender)
    }

    /// Processes requests until every sender is dropped, then hands the state back.
    pub async fn run(mut self) -> S {
        let state_type = entity_name::<S>();
        info!(state_type, "Actor started");

        let mut processed: u64 = 0;
        while let Some(request) = self.receiver.recv().await {
            self.state.dispatch(request);
            processed += 1;
        }

        info!(state_type, processed, "Shutdown");
        self.state
    }
}
