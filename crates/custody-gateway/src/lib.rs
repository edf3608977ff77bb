//! # Custody Gateway
//!
//! Authorization core of a custodial bridge: assets locked here are released,
//! minted against, or governed only by notices endorsed by a strict majority
//! of the current authority set.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): notices, authority set, custody, quorum check
//! - **Handlers** (`handlers/`): privileged operations gated by a dispatch capability
//! - **Ports Layer** (`ports/`): `NoticeGatewayApi` inbound, transfer/accounting outbound
//! - **Adapters** (`adapters/`): in-memory transfer sink and accounting ledger
//! - **Service Layer** (`service.rs`): the dispatcher that ties them together
//!
//! ## Security Notes
//!
//! - **Exact era**: notices signed for any other era are rejected
//! - **Gap-free sequencing**: each sequence applies at most once, in order
//! - **Distinct signers**: duplicate signatures count once, non-members never
//! - **Malleability Prevention (EIP-2)**: high-S signatures are rejected
//! - **All-or-nothing**: a failing notice changes nothing, cursor included

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{InMemoryAccountingLedger, InMemoryAssetTransfer, TransferRecord, INDEX_ONE};
pub use domain::{
    check_authorized, quorum_threshold, AssetId, Authority, AuthoritySet, Caller, CustodyLedger,
    DispatchTicket, Endorsement, GatewayConfig, GatewayError, GatewayState, Notice, NoticeHeader,
    NoticeKind, NoticePayload, ProcessedCursor, HEADER_LEN, NOTICE_VERSION,
};
pub use ports::inbound::{NoticeGatewayApi, NoticeReceipt};
pub use ports::outbound::{AccountingError, AccountingLedger, AssetTransfer, TransferError};
pub use service::NoticeGateway;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
