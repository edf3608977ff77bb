//! # Snapshot Store
//!
//! Persists the committed `GatewayState` (authority set, era, custody ledger,
//! cursor) as a single bincode file.
//!
//! ## Guarantees
//!
//! - One writer per data directory: an exclusive `fs2` lock on `LOCK` is held
//!   for the store's lifetime
//! - Writes go to a temporary file first and are renamed into place, so a
//!   crash mid-write leaves the previous snapshot intact
//! - Loaded snapshots are re-validated before use

use custody_gateway::GatewayState;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Lock file name inside the data directory.
pub const LOCK_FILE: &str = "LOCK";

/// Snapshot storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Another process holds the data directory.
    #[error("Data directory {0} is locked by another process")]
    Locked(PathBuf),

    /// Snapshot bytes could not be encoded or decoded.
    #[error("Snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// Snapshot decoded but violates state invariants.
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// File-backed snapshot store.
pub struct SnapshotStore {
    path: PathBuf,
    // Held for the lock; released on drop.
    _lock: File,
}

impl SnapshotStore {
    /// Open (creating if needed) `data_dir` and take its exclusive lock.
    pub fn open(data_dir: &Path, snapshot_file: &str) -> Result<Self, StorageError> {
        fs::create_dir_all(data_dir)?;

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(data_dir.join(LOCK_FILE))?;
        lock.try_lock_exclusive()
            .map_err(|_| StorageError::Locked(data_dir.to_path_buf()))?;

        let path = data_dir.join(snapshot_file);
        debug!("[gateway] Snapshot store opened at {}", path.display());
        Ok(Self { path, _lock: lock })
    }

    /// Snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last saved state, if any.
    pub fn load(&self) -> Result<Option<GatewayState>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let state: GatewayState = bincode::deserialize(&bytes)?;
        state
            .validate()
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        info!(
            "[gateway] Loaded snapshot: era {}, cursor {:?}",
            state.era(),
            state.cursor().last()
        );
        Ok(Some(state))
    }

    /// Atomically replace the snapshot with `state`.
    pub fn save(&self, state: &GatewayState) -> Result<(), StorageError> {
        let bytes = bincode::serialize(state)?;

        let tmp = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!(
            "[gateway] Snapshot saved ({} bytes, cursor {:?})",
            bytes.len(),
            state.cursor().last()
        );
        Ok(())
    }
}
