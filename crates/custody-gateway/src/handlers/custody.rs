//! Asset custody: public deposits and notice-authorized releases.

use crate::domain::{AssetId, Caller, GatewayError, GatewayState};
use crate::ports::AssetTransfer;
use shared_types::Address;
use tracing::info;

/// Deposit `amount` of `asset` into custody. Open to anyone.
///
/// Returns the new custodied balance.
pub fn lock(
    state: &mut GatewayState,
    asset: AssetId,
    amount: u128,
    sender: Address,
) -> Result<u128, GatewayError> {
    let balance = state.custody_mut().credit(asset, amount)?;
    info!(
        "[gateway] Locked {} of {} from {} (custody now {})",
        amount, asset, sender, balance
    );
    Ok(balance)
}

/// Release `amount` of `asset` to `recipient`.
///
/// Custody is debited before the transfer; a failed transfer surfaces as
/// `TransferFailed` and the caller discards the debited state.
pub fn unlock<T: AssetTransfer + ?Sized>(
    caller: &Caller,
    state: &mut GatewayState,
    transfer: &T,
    asset: AssetId,
    amount: u128,
    recipient: Address,
) -> Result<(), GatewayError> {
    state.authorize(caller)?;

    let remaining = state.custody_mut().debit(asset, amount)?;
    transfer
        .transfer(asset, recipient, amount)
        .map_err(|e| GatewayError::TransferFailed(e.to_string()))?;

    info!(
        "[gateway] Unlocked {} of {} to {} (custody now {})",
        amount, asset, recipient, remaining
    );
    Ok(())
}
