//! # Core Entities
//!
//! - **Hashing**: [`Hash`]
//! - **Identity**: [`Address`]
//! - **Routing**: [`ChainId`]

use crate::errors::ParseError;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A 32-byte digest (Keccak-256 throughout the gateway).
pub type Hash = [u8; 32];

/// Length in bytes of an [`Address`].
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte Ethereum-style address.
///
/// Derived from a secp256k1 public key as the last 20 bytes of
/// `keccak256(pubkey[1..])`. Serializes as `0x`-prefixed lowercase hex.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Copy an address out of a slice of exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; ADDRESS_LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| ParseError::BadAddress(s.to_string()))?;
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(ParseError::BadAddress(s.to_string()));
        }
        let bytes = hex::decode(digits).map_err(|_| ParseError::BadAddress(s.to_string()))?;
        Address::from_slice(&bytes).ok_or_else(|| ParseError::BadAddress(s.to_string()))
    }
}

/// Chains a notice can be addressed to.
///
/// The wire code is the single byte carried in a notice header.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub enum ChainId {
    /// Ethereum mainnet.
    #[default]
    Eth,
    /// Polkadot.
    Dot,
    /// Solana.
    Sol,
    /// Tezos.
    Tez,
}

impl ChainId {
    /// Single-byte code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            ChainId::Eth => 1,
            ChainId::Dot => 2,
            ChainId::Sol => 3,
            ChainId::Tez => 4,
        }
    }

    /// Inverse of [`ChainId::code`].
    pub fn from_code(code: u8) -> Result<Self, ParseError> {
        match code {
            1 => Ok(ChainId::Eth),
            2 => Ok(ChainId::Dot),
            3 => Ok(ChainId::Sol),
            4 => Ok(ChainId::Tez),
            other => Err(ParseError::BadChainId(format!("code {other}"))),
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChainId::Eth => "ETH",
            ChainId::Dot => "DOT",
            ChainId::Sol => "SOL",
            ChainId::Tez => "TEZ",
        };
        f.write_str(name)
    }
}

impl FromStr for ChainId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ETH" => Ok(ChainId::Eth),
            "DOT" => Ok(ChainId::Dot),
            "SOL" => Ok(ChainId::Sol),
            "TEZ" => Ok(ChainId::Tez),
            _ => Err(ParseError::BadChainId(s.to_string())),
        }
    }
}
