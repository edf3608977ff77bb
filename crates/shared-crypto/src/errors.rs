//! Signature error types.

use thiserror::Error;

/// Signature encoding and recovery errors.
///
/// Every variant means "malformed", never "forged": a well-formed signature
/// by an unknown key recovers successfully to some other address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Encoding is not exactly `r || s || v`.
    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Recovery discriminant outside 0, 1, 27, 28.
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// `r` or `s` is zero or not below the curve order.
    #[error("Signature scalar out of range")]
    ScalarOutOfRange,

    /// `s` is in the upper half of the curve order (EIP-2).
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// No public key recovers from this signature and digest.
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Secret key bytes are not a valid scalar.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The signer refused the digest.
    #[error("Signing failed")]
    SigningFailed,
}
