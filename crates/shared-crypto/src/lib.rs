//! # Shared Crypto - Gateway Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Notice digests, address derivation |
//! | `ecdsa` | secp256k1 | Signer recovery, validator signing |
//!
//! ## Security Properties
//!
//! - **Explicit failure**: malformed signatures are always an error, never a
//!   defaulted identity
//! - **Low-S only (EIP-2)**: a signature and its malleated twin cannot both pass
//! - **RFC 6979**: deterministic nonces for validator signing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{
    address_from_pubkey, recover, RecoverableSignature, Secp256k1KeyPair, SIGNATURE_LEN,
};
pub use errors::SignatureError;
pub use hashing::{keccak256, keccak256_many};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
