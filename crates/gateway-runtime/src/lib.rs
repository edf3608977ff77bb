//! # Gateway Runtime Library
//!
//! Wires a [`NoticeGateway`] to configuration, genesis, snapshot persistence
//! and logging. The `gateway-node` binary is a thin shell over this.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults + environment)
//! 2. Install the tracing subscriber
//! 3. Lock the data directory and load the last snapshot
//! 4. Fall back to genesis if there is no snapshot
//! 5. Serve notices, saving after every committed change
//!
//! A failed save leaves the node holding state newer than its snapshot. Until
//! a later save succeeds the node refuses further notices and locks, so the
//! on-disk cursor never falls more than one commit behind.

#![warn(missing_docs)]

pub mod container;
pub mod genesis;
pub mod storage;

use anyhow::{bail, Context, Result};
use custody_gateway::{
    AccountingLedger, AssetId, AssetTransfer, GatewayError, NoticeGateway, NoticeGatewayApi,
    NoticeReceipt,
};
use shared_types::Address;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub use container::{ConfigError, LoggingConfig, RuntimeConfig, StorageConfig};
pub use genesis::{CustodyEntry, GenesisBuilder, GenesisConfig, GenesisError};
pub use storage::{SnapshotStore, StorageError};

/// Install the global `fmt` subscriber filtered by `config.filter`.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| ConfigError::Logging(format!("bad filter {:?}: {}", config.filter, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

/// Errors from a running node.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The gateway rejected the operation; nothing changed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The change was committed in memory but could not be persisted.
    #[error("State committed but snapshot failed: {0}")]
    Storage(#[from] StorageError),

    /// An earlier commit is still unsaved and the retry failed; nothing was
    /// attempted.
    #[error("Node halted on unsaved state: {0}")]
    Unsaved(StorageError),
}

/// A gateway bound to its data directory.
pub struct GatewayNode<T: AssetTransfer, L: AccountingLedger> {
    gateway: NoticeGateway<T, L>,
    store: SnapshotStore,
    // Committed state newer than the snapshot.
    unsaved: bool,
}

impl<T: AssetTransfer, L: AccountingLedger> GatewayNode<T, L> {
    /// Lock the data directory and resume from its snapshot, or start from
    /// `genesis` if there is none.
    pub fn open(
        config: &RuntimeConfig,
        genesis: &GenesisConfig,
        transfer: T,
        ledger: L,
    ) -> Result<Self> {
        if genesis.chain != config.gateway.chain {
            bail!(
                "genesis is for {} but the gateway is configured for {}",
                genesis.chain,
                config.gateway.chain
            );
        }

        let store = SnapshotStore::open(&config.storage.data_dir, &config.storage.snapshot_file)
            .with_context(|| {
                format!(
                    "failed to open data directory {}",
                    config.storage.data_dir.display()
                )
            })?;

        let (state, fresh) = match store.load().context("failed to load snapshot")? {
            Some(state) => (state, false),
            None => {
                info!("[gateway] No snapshot found, starting from genesis");
                let state = GenesisBuilder::new(genesis.clone())
                    .build()
                    .context("failed to build genesis state")?;
                (state, true)
            }
        };

        let gateway = NoticeGateway::new(config.gateway.clone(), state, transfer, ledger)
            .context("state rejected by gateway configuration")?;
        if fresh {
            store
                .save(gateway.state())
                .context("failed to write genesis snapshot")?;
        }

        Ok(Self {
            gateway,
            store,
            unsaved: false,
        })
    }

    /// Retry a pending save. A no-op when the snapshot is current.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        if self.unsaved {
            self.store.save(self.gateway.state())?;
            self.unsaved = false;
            info!("[gateway] Pending snapshot saved, resuming");
        }
        Ok(())
    }

    /// Whether committed state is waiting on a successful save.
    pub fn is_unsaved(&self) -> bool {
        self.unsaved
    }

    fn ready(&mut self) -> Result<(), NodeError> {
        self.flush().map_err(|e| {
            warn!("[gateway] Still unable to save snapshot: {}", e);
            NodeError::Unsaved(e)
        })
    }

    fn persist(&mut self) -> Result<(), NodeError> {
        self.unsaved = true;
        self.store.save(self.gateway.state()).map_err(|e| {
            error!("[gateway] Snapshot failed, halting until saved: {}", e);
            NodeError::Storage(e)
        })?;
        self.unsaved = false;
        Ok(())
    }

    /// Apply a notice and persist the result.
    pub fn submit_notice<S: AsRef<[u8]> + Sync>(
        &mut self,
        notice: &[u8],
        signatures: &[S],
    ) -> Result<NoticeReceipt, NodeError> {
        self.ready()?;
        let receipt = self.gateway.execute_notice(notice, signatures)?;
        self.persist()?;
        Ok(receipt)
    }

    /// Deposit into custody and persist the result.
    pub fn lock(&mut self, asset: AssetId, amount: u128, sender: Address) -> Result<u128, NodeError> {
        self.ready()?;
        let balance = self.gateway.lock(asset, amount, sender)?;
        self.persist()?;
        Ok(balance)
    }

    /// The wrapped gateway, read-only.
    pub fn gateway(&self) -> &NoticeGateway<T, L> {
        &self.gateway
    }

    /// Snapshot store in use.
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }
}
