//! # Notice Handlers
//!
//! One handler per [`NoticeKind`](crate::domain::NoticeKind). Every privileged
//! handler first asks the state to authorize its caller, so calling one
//! without the dispatcher's ticket fails with `CallerNotSelf` before any
//! state is touched.

pub mod accounting;
pub mod authority;
pub mod custody;

pub use accounting::mint;
pub use authority::change_authorities;
pub use custody::{lock, unlock};

use crate::domain::{Caller, GatewayConfig, GatewayError, GatewayState, NoticePayload};
use crate::ports::{AccountingLedger, AssetTransfer};

/// Route a decoded payload to its handler.
pub fn dispatch<T, L>(
    caller: &Caller,
    state: &mut GatewayState,
    config: &GatewayConfig,
    transfer: &T,
    ledger: &L,
    payload: NoticePayload,
) -> Result<(), GatewayError>
where
    T: AssetTransfer + ?Sized,
    L: AccountingLedger + ?Sized,
{
    match payload {
        NoticePayload::Unlock {
            asset,
            amount,
            recipient,
        } => unlock(caller, state, transfer, asset, amount, recipient),
        NoticePayload::Mint { holder, principal } => mint(caller, state, ledger, holder, principal),
        NoticePayload::ChangeAuthorities { authorities } => {
            change_authorities(caller, state, config, authorities).map(|_| ())
        }
    }
}
