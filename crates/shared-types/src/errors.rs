//! # Error Types
//!
//! Parse failures for the textual forms of shared primitives.

use thiserror::Error;

/// Errors raised while parsing addresses and chain selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Address text is not `0x` followed by 40 hex digits.
    #[error("Bad address: {0}")]
    BadAddress(String),

    /// Unknown chain name or wire code.
    #[error("Bad chain id: {0}")]
    BadChainId(String),
}
