//! # Storage
//!
//! Durable snapshots of committed gateway state.

pub mod snapshot;

pub use snapshot::{SnapshotStore, StorageError, LOCK_FILE};
