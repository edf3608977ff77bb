//! Authority rotation.

use crate::domain::{Authority, Caller, GatewayConfig, GatewayError, GatewayState};
use tracing::info;

/// Replace the authority set and advance the era by one.
///
/// Returns the new era. Notices signed for the previous era stop verifying
/// from here on. A set whose quorum exceeds `config.max_signatures` is
/// refused.
pub fn change_authorities(
    caller: &Caller,
    state: &mut GatewayState,
    config: &GatewayConfig,
    authorities: Vec<Authority>,
) -> Result<u64, GatewayError> {
    state.authorize(caller)?;

    let size = authorities.len();
    config.check_set_size(size)?;
    let era = state.authorities_mut().rotate(authorities)?;

    info!(
        "[gateway] Authority set rotated to era {} ({} members, quorum {})",
        era,
        size,
        size / 2 + 1
    );
    Ok(era)
}
