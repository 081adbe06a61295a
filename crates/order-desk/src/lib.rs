//! # Order Desk
//!
//! In-memory store for a small order-management domain: foods, clients, menus built from
//! foods, and orders placed by clients for menus.
//!
//! ## Core Components
//!
//! - **[model]**: the records and their create/update payloads.
//! - **[food_store], [client_store], [menu_store], [order_store]**: one chained hash table per
//!   record kind, with validation of cross-table references on every write.
//! - **[desk]**: [`OrderDesk`](desk::OrderDesk), the four stores created together, plus
//!   configuration and the actor's request type.
//! - **[handles]** and **[lifecycle]**: the single-writer actor façade for concurrent callers.
//! - **[export]**: the YAML-style document writer.
//! - **[generator]**: seeded sample data.
//!
//! ## Referential Integrity
//!
//! A menu may only list foods that exist and are available; an order needs an existing
//! client and existing menus. These checks run when the menu or order is written. Deleting a
//! food, client or menu later never cascades: the id stays where it was and is reported as
//! missing when resolved.

pub mod client_store;
pub mod desk;
pub mod export;
pub mod food_store;
pub mod generator;
pub mod handles;
pub mod lifecycle;
pub mod menu_store;
pub mod model;
pub mod order_store;
