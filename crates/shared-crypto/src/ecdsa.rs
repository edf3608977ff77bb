//! # ECDSA Signer Recovery (secp256k1)
//!
//! Maps `(digest, signature bytes)` to the signer's [`Address`].
//!
//! ## Encoding
//!
//! A signature is exactly [`SIGNATURE_LEN`] bytes: `r (32) || s (32) || v (1)`
//! with `v` in `{0, 1, 27, 28}`.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: `r` and `s` must be in `[1, n-1]`
//! - **Malleability Prevention (EIP-2)**: `s` must be STRICTLY LESS THAN `n/2`
//! - **Constant-Time Comparisons**: range checks use the `subtle` crate
//! - Recovery never yields a placeholder identity; malformed input is an error

use crate::errors::SignatureError;
use crate::hashing::keccak256;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Length of an encoded recoverable signature.
pub const SIGNATURE_LEN: usize = 65;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order, rounded down.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

// =============================================================================
// SIGNATURE ENCODING
// =============================================================================

/// A parsed `r || s || v` signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery discriminant (0, 1, 27, or 28)
    pub v: u8,
}

impl RecoverableSignature {
    /// Parse the fixed-length encoding.
    ///
    /// Only the length is checked here; scalar and discriminant validation
    /// happens in [`recover`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(SignatureError::InvalidLength {
                expected: SIGNATURE_LEN,
                actual: bytes.len(),
            });
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    /// Encode as `r || s || v`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Encode into an owned byte vector, the shape a signature list carries.
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

// =============================================================================
// RECOVERY
// =============================================================================

/// Recover the signer address from a 32-byte digest and an encoded signature.
///
/// Validations performed, in order:
/// 1. Encoding is exactly 65 bytes
/// 2. Recovery ID (v) is 0, 1, 27, or 28
/// 3. R and S are in `[1, n-1]`
/// 4. S is in the lower half of the curve order
/// 5. Public key recovery succeeds
///
/// Deterministic: identical inputs always yield the identical address.
pub fn recover(digest: &Hash, signature: &[u8]) -> Result<Address, SignatureError> {
    let signature = RecoverableSignature::from_slice(signature)?;
    recover_parsed(digest, &signature)
}

/// Recover from an already-parsed signature.
pub fn recover_parsed(
    digest: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, SignatureError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(SignatureError::ScalarOutOfRange);
    }

    if !is_low_s(&signature.s) {
        return Err(SignatureError::MalleableSignature);
    }

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = Signature::from_slice(&sig_bytes).map_err(|_| SignatureError::ScalarOutOfRange)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive an Ethereum-style address from a public key.
///
/// Last 20 bytes of `keccak256(x || y)` over the uncompressed point.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Skip the 0x04 uncompressed-point tag
    let hash = keccak256(&pubkey_slice[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address(address)
}

// =============================================================================
// VALIDATOR SIGNING
// =============================================================================

/// secp256k1 keypair held by a validator.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Create from secret key bytes (32 bytes). The input copy is cleared.
    pub fn from_bytes(mut bytes: [u8; 32]) -> Result<Self, SignatureError> {
        let signing_key = SigningKey::from_bytes((&bytes).into());
        bytes.zeroize();
        let signing_key = signing_key.map_err(|_| SignatureError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Public verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Address this keypair signs as.
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest (deterministic RFC 6979).
    ///
    /// Output is low-S normalized with `v` in `{27, 28}`.
    pub fn sign_digest(&self, digest: &Hash) -> Result<RecoverableSignature, SignatureError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|_| SignatureError::SigningFailed)?;

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        let mut y_odd = recid.is_y_odd();
        if !is_low_s(&s) {
            s = invert_s(&s);
            y_odd = !y_odd;
        }

        Ok(RecoverableSignature {
            r,
            s,
            v: 27 + u8::from(y_odd),
        })
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}

/// Constant-time big-endian comparison. Returns `(less, greater)`.
fn ct_compare(a: &[u8; 32], b: &[u8; 32]) -> (Choice, Choice) {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        let byte_less = Choice::from((a[i] < b[i]) as u8);
        let byte_greater = Choice::from((a[i] > b[i]) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    (less, greater)
}

/// Check if S value is in lower half of curve order (EIP-2).
///
/// Per EIP-2: S must be STRICTLY LESS THAN half_order (not equal).
pub(crate) fn is_low_s(s: &[u8; 32]) -> bool {
    let (less, _) = ct_compare(s, &SECP256K1_HALF_ORDER);
    less.into()
}

/// Check if a scalar value is in valid range `[1, n-1]`.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let (less, _) = ct_compare(scalar, &SECP256K1_ORDER);
    (!is_zero & less).into()
}

/// Negate S modulo the curve order: `s' = n - s`.
///
/// Turns a low-S signature into its high-S twin and back.
pub fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}
