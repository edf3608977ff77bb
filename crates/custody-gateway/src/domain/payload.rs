//! # Notice Payloads
//!
//! Fixed-width body layouts, one per [`NoticeKind`]:
//!
//! | Kind | Layout |
//! |------|--------|
//! | unlock | `asset (20) ‖ amount (u128 BE) ‖ recipient (20)` |
//! | mint | `holder (20) ‖ principal (u128 BE)` |
//! | change-authorities | `count (u16 BE) ‖ count × authority (20)` |

use super::entities::{AssetId, Authority};
use super::errors::GatewayError;
use super::notice::NoticeKind;
use shared_types::{Address, ADDRESS_LEN};

/// Handler arguments carried by a notice body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticePayload {
    /// Release `amount` of `asset` from custody to `recipient`.
    Unlock {
        /// Custodied asset
        asset: AssetId,
        /// Amount to release
        amount: u128,
        /// Receiving address
        recipient: Address,
    },
    /// Credit `principal` to `holder` in the accounting ledger.
    Mint {
        /// Account credited
        holder: Address,
        /// Principal units
        principal: u128,
    },
    /// Replace the authority set.
    ChangeAuthorities {
        /// New members, in order
        authorities: Vec<Authority>,
    },
}

impl NoticePayload {
    /// Kind byte this payload is dispatched under.
    pub fn kind(&self) -> NoticeKind {
        match self {
            NoticePayload::Unlock { .. } => NoticeKind::Unlock,
            NoticePayload::Mint { .. } => NoticeKind::Mint,
            NoticePayload::ChangeAuthorities { .. } => NoticeKind::ChangeAuthorities,
        }
    }

    /// Encode the body.
    pub fn encode_body(&self) -> Vec<u8> {
        match self {
            NoticePayload::Unlock {
                asset,
                amount,
                recipient,
            } => {
                let mut out = Vec::with_capacity(ADDRESS_LEN * 2 + 16);
                out.extend_from_slice(asset.0.as_bytes());
                out.extend_from_slice(&amount.to_be_bytes());
                out.extend_from_slice(recipient.as_bytes());
                out
            }
            NoticePayload::Mint { holder, principal } => {
                let mut out = Vec::with_capacity(ADDRESS_LEN + 16);
                out.extend_from_slice(holder.as_bytes());
                out.extend_from_slice(&principal.to_be_bytes());
                out
            }
            NoticePayload::ChangeAuthorities { authorities } => {
                // Oversized sets saturate the count; decode rejects the mismatch.
                let count = u16::try_from(authorities.len()).unwrap_or(u16::MAX);
                let mut out = Vec::with_capacity(2 + authorities.len() * ADDRESS_LEN);
                out.extend_from_slice(&count.to_be_bytes());
                for authority in authorities {
                    out.extend_from_slice(authority.0.as_bytes());
                }
                out
            }
        }
    }

    /// Decode a body for `kind`. Any length mismatch is `MalformedNotice`.
    pub fn decode(kind: NoticeKind, body: &[u8]) -> Result<Self, GatewayError> {
        match kind {
            NoticeKind::Unlock => {
                expect_len(kind, body, ADDRESS_LEN * 2 + 16)?;
                Ok(NoticePayload::Unlock {
                    asset: AssetId(read_address(&body[..20])),
                    amount: read_u128(&body[20..36]),
                    recipient: read_address(&body[36..56]),
                })
            }
            NoticeKind::Mint => {
                expect_len(kind, body, ADDRESS_LEN + 16)?;
                Ok(NoticePayload::Mint {
                    holder: read_address(&body[..20]),
                    principal: read_u128(&body[20..36]),
                })
            }
            NoticeKind::ChangeAuthorities => {
                if body.len() < 2 {
                    return Err(GatewayError::MalformedNotice(
                        "change-authorities body missing count".to_string(),
                    ));
                }
                let count = u16::from_be_bytes([body[0], body[1]]) as usize;
                expect_len(kind, body, 2 + count * ADDRESS_LEN)?;
                let authorities = body[2..]
                    .chunks_exact(ADDRESS_LEN)
                    .map(|chunk| Authority(read_address(chunk)))
                    .collect();
                Ok(NoticePayload::ChangeAuthorities { authorities })
            }
        }
    }
}

fn expect_len(kind: NoticeKind, body: &[u8], expected: usize) -> Result<(), GatewayError> {
    if body.len() != expected {
        return Err(GatewayError::MalformedNotice(format!(
            "{kind} body must be {expected} bytes, got {}",
            body.len()
        )));
    }
    Ok(())
}

fn read_address(bytes: &[u8]) -> Address {
    let mut out = [0u8; ADDRESS_LEN];
    out.copy_from_slice(bytes);
    Address(out)
}

fn read_u128(bytes: &[u8]) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(bytes);
    u128::from_be_bytes(buf)
}
