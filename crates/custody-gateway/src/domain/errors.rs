//! # Gateway Errors
//!
//! Every failure of `execute_notice` is one of these classified kinds. None
//! are retried internally, and each leaves committed state untouched.

use super::entities::{AssetId, Authority};
use shared_crypto::SignatureError;
use shared_types::ChainId;
use thiserror::Error;

/// Gateway error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// A signature does not match the `r || s || v` encoding.
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(#[from] SignatureError),

    /// Notice header or body cannot be parsed.
    #[error("Malformed notice: {0}")]
    MalformedNotice(String),

    /// Notice addressed to a different chain.
    #[error("Chain mismatch: gateway serves {expected}, notice targets {actual}")]
    ChainMismatch {
        /// Chain this gateway serves
        expected: ChainId,
        /// Chain named in the notice
        actual: ChainId,
    },

    /// Notice signed against a different authority-set era.
    #[error("Era mismatch: active era {expected}, notice era {actual}")]
    EraMismatch {
        /// Active era
        expected: u64,
        /// Era named in the notice
        actual: u64,
    },

    /// Notice sequence skips ahead of the cursor.
    #[error("Notice out of order: expected sequence {expected}, got {actual}")]
    NoticeOutOfOrder {
        /// Next sequence the gateway accepts
        expected: u64,
        /// Sequence named in the notice
        actual: u64,
    },

    /// Notice sequence is at or below the cursor.
    #[error("Notice already processed: sequence {sequence} <= cursor {cursor}")]
    NoticeAlreadyProcessed {
        /// Sequence named in the notice
        sequence: u64,
        /// Last applied sequence
        cursor: u64,
    },

    /// Fewer distinct authorized signers than the quorum.
    #[error("Quorum not met: {have}/{need} distinct authorities")]
    QuorumNotMet {
        /// Distinct authorized signers found
        have: usize,
        /// Quorum threshold
        need: usize,
    },

    /// Signature list longer than the configured cap.
    #[error("Too many signatures: {got} exceeds limit {max}")]
    TooManySignatures {
        /// Configured cap
        max: usize,
        /// Signatures submitted
        got: usize,
    },

    /// An authority set whose quorum could never fit under the signature cap.
    #[error("Quorum {quorum} exceeds signature limit {max}")]
    QuorumExceedsSignatureLimit {
        /// Quorum of the offending set
        quorum: usize,
        /// Configured cap
        max: usize,
    },

    /// An authority set with no members.
    #[error("Authority set is empty")]
    EmptyAuthoritySet,

    /// An authority listed twice in a new set.
    #[error("Duplicate authority: {0}")]
    DuplicateAuthority(Authority),

    /// Era counter cannot advance further.
    #[error("Era counter overflow")]
    EraOverflow,

    /// Unlock exceeds the custodied balance.
    #[error("Insufficient custody of {asset}: requested {requested}, held {available}")]
    InsufficientCustody {
        /// Asset being released
        asset: AssetId,
        /// Amount requested
        requested: u128,
        /// Amount in custody
        available: u128,
    },

    /// Lock would overflow the custodied balance.
    #[error("Custody overflow for {0}")]
    CustodyOverflow(AssetId),

    /// Privileged handler invoked outside the dispatch path.
    #[error("Caller is not the dispatcher")]
    CallerNotSelf,

    /// External asset transfer failed.
    #[error("Asset transfer failed: {0}")]
    TransferFailed(String),

    /// External accounting ledger refused the mint.
    #[error("Mint failed: {0}")]
    MintFailed(String),
}

impl GatewayError {
    /// Whether resubmitting the same bytes and signatures could ever succeed.
    ///
    /// Out-of-order notices become valid once the gap is filled, and external
    /// collaborator failures may clear. Everything else needs new input.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayError::NoticeOutOfOrder { .. }
                | GatewayError::TransferFailed(_)
                | GatewayError::MintFailed(_)
        )
    }
}
