//! # Domain Entities
//!
//! Identities, the processed-notice cursor and gateway configuration.

use super::errors::GatewayError;
use super::verifier::quorum_threshold;
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainId};
use std::fmt;

/// A federated validator entitled to sign notices.
///
/// Identified by equality of the address derived from its public key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(pub Address);

impl Authority {
    /// The underlying address.
    pub fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for Authority {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Authority({})", self.0)
    }
}

/// Identifier of a custodied asset (its token address on the served chain).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub Address);

impl From<Address> for AssetId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self.0)
    }
}

/// Sequence number of the last applied notice.
///
/// Starts at "none"; the first acceptable notice is sequence 1. Advances by
/// exactly one per applied notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedCursor(Option<u64>);

impl ProcessedCursor {
    /// Cursor with nothing applied yet.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Last applied sequence, if any.
    pub fn last(&self) -> Option<u64> {
        self.0
    }

    /// The only sequence the gateway will accept next, or `None` once the
    /// cursor has reached `u64::MAX` and no further notice can be applied.
    pub fn next_expected(&self) -> Option<u64> {
        match self.0 {
            None => Some(1),
            Some(last) => last.checked_add(1),
        }
    }

    /// Move to `sequence`. Callers have already checked it is
    /// [`next_expected`](Self::next_expected).
    pub(crate) fn advance(&mut self, sequence: u64) {
        debug_assert_eq!(Some(sequence), self.next_expected());
        self.0 = Some(sequence);
    }
}

/// Gateway configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Chain whose notices this gateway accepts.
    pub chain: ChainId,
    /// Upper bound on signatures accompanying one notice.
    pub max_signatures: usize,
}

impl GatewayConfig {
    /// Check that a set of `members` authorities can still reach quorum
    /// within `max_signatures`.
    pub fn check_set_size(&self, members: usize) -> Result<(), GatewayError> {
        let quorum = quorum_threshold(members)?;
        if quorum > self.max_signatures {
            return Err(GatewayError::QuorumExceedsSignatureLimit {
                quorum,
                max: self.max_signatures,
            });
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            chain: ChainId::Eth,
            max_signatures: 256,
        }
    }
}
