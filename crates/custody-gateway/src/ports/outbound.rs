//! # Outbound Ports
//!
//! External effects the gateway triggers: moving assets out of custody and
//! crediting principal in the accounting ledger. Both are synchronous and
//! either fully succeed or fail without effect.

use crate::domain::AssetId;
use shared_types::Address;
use std::sync::Arc;
use thiserror::Error;

/// Asset transfer failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The transfer mechanism refused or failed.
    #[error("Transfer rejected: {0}")]
    Rejected(String),

    /// Recipient cannot receive this asset.
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(Address),
}

/// Accounting ledger failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountingError {
    /// Principal would overflow for this holder.
    #[error("Principal overflow for {0}")]
    Overflow(Address),

    /// Ledger unavailable.
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Moves released custody to a recipient - outbound port.
pub trait AssetTransfer: Send + Sync {
    /// Send `amount` of `asset` to `recipient`.
    fn transfer(
        &self,
        asset: AssetId,
        recipient: Address,
        amount: u128,
    ) -> Result<(), TransferError>;
}

/// Principal accounting on the served chain - outbound port.
pub trait AccountingLedger: Send + Sync {
    /// Credit `principal` units to `holder`.
    fn mint(&self, holder: Address, principal: u128) -> Result<(), AccountingError>;
}

impl<T: AssetTransfer + ?Sized> AssetTransfer for Arc<T> {
    fn transfer(
        &self,
        asset: AssetId,
        recipient: Address,
        amount: u128,
    ) -> Result<(), TransferError> {
        (**self).transfer(asset, recipient, amount)
    }
}

impl<L: AccountingLedger + ?Sized> AccountingLedger for Arc<L> {
    fn mint(&self, holder: Address, principal: u128) -> Result<(), AccountingError> {
        (**self).mint(holder, principal)
    }
}
