//! # Desk Handles
//!
//! Typed, cloneable front ends to the desk actor, one per record kind. Each wraps a
//! [`ResourceClient`](table_framework::ResourceClient) and inherits `get`, `delete`,
//! `snapshot`, `count`, `sorted_by_key` and `search_by_key` from
//! [`ActorClient`](table_framework::ActorClient); the handle adds the operations whose
//! payload is specific to its record kind.
//!
//! Handles carry the desk's configured search worker count; sorts and searches run on
//! Tokio's blocking pool, never on the async worker that awaits them.
//!
//! Every method returns the record kind's own error. If the actor is gone the error is
//! `Table(TableError::ActorClosed)`.

pub mod client_handle;
pub mod food_handle;
pub mod menu_handle;
pub mod order_handle;

pub use client_handle::ClientHandle;
pub use food_handle::FoodHandle;
pub use menu_handle::MenuHandle;
pub use order_handle::OrderHandle;
