//! # Table Framework
//!
//! Building blocks for in-memory record stores: a fixed-bucket chained hash table keyed by an
//! entity's own key, parallel sort and search over snapshots of it, and a single-writer actor
//! that serializes mutations arriving from concurrent tasks.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`TableEntity`]) - The record kind: key, bucket function, create and
//!    update payloads, validation hooks, and the context used to check references into other
//!    tables.
//! 2. **Storage Layer** ([`HashTable`], [`SortedSnapshot`]) - Chained buckets, snapshots,
//!    fork-join quicksort and windowed parallel binary search.
//! 3. **Runtime Layer** ([`TableActor`], [`ResourceClient`], [`ActorClient`]) - Message passing
//!    for callers that do not own the tables.
//!
//! Business rules live in the entity once; the table, the sort pipeline and the request
//! plumbing are shared by every record kind.
//!
//! ## Example
//!
//! ```rust
//! use table_framework::{hashing, HashTable, TableEntity, TableError};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: i32,
//!     text: String,
//! }
//!
//! #[derive(Debug)]
//! struct NoteCreate {
//!     text: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum NoteError {
//!     #[error(transparent)]
//!     Table(#[from] TableError),
//! }
//!
//! impl TableEntity for Note {
//!     type Key = i32;
//!     type Create = NoteCreate;
//!     type Update = String;
//!     type Context<'a> = ();
//!     type Error = NoteError;
//!
//!     fn key(&self) -> i32 {
//!         self.id
//!     }
//!
//!     fn bucket_index(key: i32, bucket_count: usize) -> usize {
//!         hashing::modulo(key, bucket_count)
//!     }
//!
//!     fn from_create_params(id: i32, params: NoteCreate) -> Result<Self, NoteError> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     fn on_update(&mut self, text: String, _ctx: ()) -> Result<(), NoteError> {
//!         self.text = text;
//!         Ok(())
//!     }
//! }
//!
//! let mut notes = HashTable::<Note>::default();
//! notes.insert(7, NoteCreate { text: "first".into() }, ()).unwrap();
//! notes.insert(3, NoteCreate { text: "second".into() }, ()).unwrap();
//! assert!(notes.insert(7, NoteCreate { text: "again".into() }, ()).is_err());
//!
//! let sorted = notes.sorted_by_key();
//! assert_eq!(sorted.search(7), Some(1));
//! assert_eq!(sorted.search(4), None);
//! ```
//!
//! ## Concurrency Model
//!
//! - Tables take `&mut self` for every write, so within one owner writes are sequential.
//! - Sorting and searching run on owned snapshots, so parallel workers never see a writer.
//! - When several tasks need to write, they talk to a [`TableActor`] that owns the tables.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod hashing;
pub mod message;
pub mod search;
pub mod table;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{serve, Dispatch, TableActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{entity_name, TableEntity};
pub use error::TableError;
pub use message::{ResourceRequest, Response};
pub use search::{parallel_binary_search, parallel_quicksort, run_blocking, SortedSnapshot};
pub use table::HashTable;
