//! Principal minting on the accounting ledger.

use crate::domain::{Caller, GatewayError, GatewayState};
use crate::ports::AccountingLedger;
use shared_types::Address;
use tracing::info;

/// Credit `principal` to `holder`.
///
/// The gateway holds no accounting state of its own; the ledger port owns it.
pub fn mint<L: AccountingLedger + ?Sized>(
    caller: &Caller,
    state: &GatewayState,
    ledger: &L,
    holder: Address,
    principal: u128,
) -> Result<(), GatewayError> {
    state.authorize(caller)?;

    ledger
        .mint(holder, principal)
        .map_err(|e| GatewayError::MintFailed(e.to_string()))?;

    info!("[gateway] Minted {} principal to {}", principal, holder);
    Ok(())
}
