//! # Domain Model
//!
//! Plain records and their create/update payloads. Each record implements
//! [`TableEntity`](table_framework::TableEntity) in its store module (`*_store::entity`).
//!
//! Records refer to each other by integer id only. A menu lists food ids and an order lists
//! a client id and menu ids; the ids are resolved by lookup whenever they are displayed.

pub mod client;
pub mod fields;
pub mod food;
pub mod menu;
pub mod order;

pub use client::*;
pub use food::*;
pub use menu::*;
pub use order::*;
