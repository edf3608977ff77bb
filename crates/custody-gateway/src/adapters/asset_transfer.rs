//! Asset Transfer Adapter
//!
//! Implements `AssetTransfer` by recording every release in memory.

use crate::domain::AssetId;
use crate::ports::outbound::{AssetTransfer, TransferError};
use parking_lot::RwLock;
use shared_types::Address;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// One completed transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    /// Asset moved.
    pub asset: AssetId,
    /// Receiving address.
    pub recipient: Address,
    /// Amount moved.
    pub amount: u128,
}

/// In-memory transfer sink.
///
/// In production this would submit a token transfer on the served chain.
#[derive(Default)]
pub struct InMemoryAssetTransfer {
    records: RwLock<Vec<TransferRecord>>,
    failing: AtomicBool,
}

impl InMemoryAssetTransfer {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent transfer fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Completed transfers, oldest first.
    pub fn transfers(&self) -> Vec<TransferRecord> {
        self.records.read().clone()
    }

    /// Total of `asset` sent to `recipient`.
    pub fn received(&self, recipient: &Address, asset: &AssetId) -> u128 {
        self.records
            .read()
            .iter()
            .filter(|r| r.recipient == *recipient && r.asset == *asset)
            .fold(0u128, |acc, r| acc.saturating_add(r.amount))
    }
}

impl AssetTransfer for InMemoryAssetTransfer {
    fn transfer(
        &self,
        asset: AssetId,
        recipient: Address,
        amount: u128,
    ) -> Result<(), TransferError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransferError::Rejected("transfer disabled".to_string()));
        }
        if recipient == Address::default() {
            return Err(TransferError::InvalidRecipient(recipient));
        }

        debug!("[gateway] Transfer {} of {} to {}", amount, asset, recipient);
        self.records.write().push(TransferRecord {
            asset,
            recipient,
            amount,
        });
        Ok(())
    }
}
