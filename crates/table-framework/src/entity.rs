//! # TableEntity Trait
//!
//! The `TableEntity` trait is the contract every record kind (Food, Client, Menu, Order, …)
//! implements to be stored in a [`HashTable`](crate::HashTable). It names the key type, the
//! create/update DTOs, the lookup context used for cross-table validation and the error type,
//! and provides the validation hooks the table calls before any mutation.
//!
//! # Architecture Note
//! By defining one contract for every record kind we write the chained table, the request
//! plumbing and the sort/search pipeline *once* and reuse them everywhere.
//!
//! Associated types keep the API type safe: a `Menu` table only accepts a `MenuCreate`
//! payload, and you can't accidentally hand it a `FoodCreate`.
//!
//! # Provided Methods (Hooks)
//! - [`TableEntity::on_create`] runs after the record is built and before it is linked
//!   into its bucket. The default accepts everything.
//!
//! # Context
//! Records that reference other tables (a menu references foods, an order references a
//! client and menus) declare a [`TableEntity::Context`]. The context is a borrowed view of
//! the referenced tables, passed in at call time, so tables never hold pointers to each other.

use crate::error::TableError;
use std::fmt::{Debug, Display};

/// Trait that any record kind must implement to be managed by a [`HashTable`](crate::HashTable).
pub trait TableEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique key of a record. Two records in the same table never share a key.
    type Key: Copy + Eq + Ord + Display + Debug + Send + Sync + 'static;

    /// The data required to create a new record (DTO - Data Transfer Object).
    type Create: Send + Debug;

    /// The data required to update an existing record.
    type Update: Send + Debug;

    /// Borrowed view of other tables used to validate foreign keys.
    /// Use `()` if the record references nothing.
    type Context<'a>: Copy;

    /// The error type for this record kind.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One enum per record kind, covering both the table's own failures (duplicate key,
    /// missing key) through `From<TableError>` and the record's validation failures.
    /// Callers match on a single `FoodError` or `MenuError` instead of nested results.
    type Error: std::error::Error + From<TableError> + Send + Sync + 'static;

    /// Returns the record's key.
    fn key(&self) -> Self::Key;

    /// Maps a key to a bucket index in `[0, bucket_count)`.
    ///
    /// Must be pure and total over every representable key.
    fn bucket_index(key: Self::Key, bucket_count: usize) -> usize;

    /// Builds the full record from its key and payload.
    /// Field-level validation (lengths, enums, formats) belongs here.
    fn from_create_params(key: Self::Key, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the record is built and before it is stored.
    /// Use this hook to check references against the context.
    fn on_create(&self, _ctx: Self::Context<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update request.
    ///
    /// The table calls this on a scratch copy and only commits the copy when the hook
    /// returns `Ok`, so a failed update never leaves a half-written record behind.
    fn on_update(&mut self, update: Self::Update, ctx: Self::Context<'_>)
        -> Result<(), Self::Error>;
}

/// Short type name of an entity (e.g. `"Food"` instead of `"order_desk::model::food::Food"`),
/// used as the `entity_type` field on every tracing event.
pub fn entity_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
