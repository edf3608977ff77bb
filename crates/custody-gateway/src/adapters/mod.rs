//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports.

mod accounting_ledger;
mod asset_transfer;

pub use accounting_ledger::{InMemoryAccountingLedger, INDEX_ONE};
pub use asset_transfer::{InMemoryAssetTransfer, TransferRecord};
