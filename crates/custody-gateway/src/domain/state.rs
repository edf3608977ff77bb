//! # Gateway State
//!
//! The single state object every operation reads and writes: authority set,
//! custody balances and the processed-notice cursor. Constructed explicitly
//! and handed to the gateway, never a global.

use super::authority_set::AuthoritySet;
use super::capability::Caller;
use super::custody::CustodyLedger;
use super::entities::{AssetId, ProcessedCursor};
use super::errors::GatewayError;
use serde::{Deserialize, Serialize};

/// Authoritative gateway state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayState {
    authorities: AuthoritySet,
    custody: CustodyLedger,
    cursor: ProcessedCursor,
    /// Sequence of the notice currently being dispatched, if any.
    #[serde(skip)]
    open_dispatch: Option<u64>,
}

impl GatewayState {
    /// Fresh state: era 0 of `authorities`, nothing processed.
    pub fn genesis(authorities: AuthoritySet, custody: CustodyLedger) -> Self {
        Self {
            authorities,
            custody,
            cursor: ProcessedCursor::none(),
            open_dispatch: None,
        }
    }

    /// Re-check invariants after loading from storage.
    pub fn validate(&self) -> Result<(), GatewayError> {
        self.authorities.validate()
    }

    /// Active authority set.
    pub fn authorities(&self) -> &AuthoritySet {
        &self.authorities
    }

    /// Custody balances.
    pub fn custody(&self) -> &CustodyLedger {
        &self.custody
    }

    /// Custodied balance of one asset.
    pub fn custody_balance(&self, asset: &AssetId) -> u128 {
        self.custody.balance(asset)
    }

    /// Processed-notice cursor.
    pub fn cursor(&self) -> ProcessedCursor {
        self.cursor
    }

    /// Active era.
    pub fn era(&self) -> u64 {
        self.authorities.era()
    }

    /// Succeeds only for the dispatcher's ticket for the open notice.
    pub fn authorize(&self, caller: &Caller) -> Result<(), GatewayError> {
        match (caller, self.open_dispatch) {
            (Caller::Dispatcher(ticket), Some(open)) if ticket.sequence() == open => Ok(()),
            _ => Err(GatewayError::CallerNotSelf),
        }
    }

    pub(crate) fn authorities_mut(&mut self) -> &mut AuthoritySet {
        &mut self.authorities
    }

    pub(crate) fn custody_mut(&mut self) -> &mut CustodyLedger {
        &mut self.custody
    }

    /// Record `sequence` as applied and open its dispatch window.
    pub(crate) fn begin_dispatch(&mut self, sequence: u64) {
        self.cursor.advance(sequence);
        self.open_dispatch = Some(sequence);
    }

    pub(crate) fn end_dispatch(&mut self) {
        self.open_dispatch = None;
    }
}
