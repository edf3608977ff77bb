//! # Inbound Ports
//!
//! API trait defining what the gateway can do.

use crate::domain::{
    AssetId, AuthoritySet, Caller, GatewayError, NoticeKind, NoticePayload, ProcessedCursor,
};
use shared_types::Address;

/// Outcome of an applied notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeReceipt {
    /// Era the notice was applied under.
    pub era: u64,
    /// Sequence now recorded in the cursor.
    pub sequence: u64,
    /// Handler that ran.
    pub kind: NoticeKind,
    /// Distinct authorized signers counted.
    pub signers: usize,
}

/// Notice gateway API - inbound port.
pub trait NoticeGatewayApi {
    /// Parse, verify and apply one notice. On error nothing changes.
    fn execute_notice<S: AsRef<[u8]> + Sync>(
        &mut self,
        notice: &[u8],
        signatures: &[S],
    ) -> Result<NoticeReceipt, GatewayError>;

    /// Public deposit into custody. Returns the new balance.
    fn lock(&mut self, asset: AssetId, amount: u128, sender: Address) -> Result<u128, GatewayError>;

    /// Run a privileged handler directly. Only the dispatcher's own
    /// capability passes; every other caller gets `CallerNotSelf`.
    fn invoke(&mut self, caller: Caller, payload: NoticePayload) -> Result<(), GatewayError>;

    /// Active era.
    fn era(&self) -> u64;

    /// Active authority set.
    fn authorities(&self) -> &AuthoritySet;

    /// Processed-notice cursor.
    fn cursor(&self) -> ProcessedCursor;

    /// Custodied balance of one asset.
    fn custody_balance(&self, asset: &AssetId) -> u128;
}
