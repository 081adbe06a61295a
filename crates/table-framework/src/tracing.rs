//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for a binary built on these
//! tables.
//!
//! ## Configuration
//!
//! Levels come from the `RUST_LOG` environment variable. The output uses the compact
//! format and hides module paths (`with_target(false)`); every table event carries an
//! `entity_type` field instead.
//!
//! ```bash
//! # Inserts, removals and actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Also lookups, sorts, searches and rejected references
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Table operations**: `Inserted`, `Updated`, `Deleted`, `Table released` at info; duplicate
//!   and missing keys at warn.
//! - **Snapshots**: sort and search requests at debug, with the snapshot size and the
//!   resulting index.
//! - **Actor lifecycle**: `Actor started` and `Shutdown` with the number of processed
//!   requests.
//!
//! Calling it twice panics, because the global subscriber can only be set once.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the table instead
        .compact()
        .init();
}
