//! # Notice Verifier
//!
//! Quorum arithmetic and the signature-list check.
//!
//! ## Rules
//!
//! - `quorum(n) = floor(n/2) + 1` for `n >= 1`
//! - A malformed signature fails the whole check (never silently skipped)
//! - Signers outside the set do not contribute, and are not fatal
//! - An authority signing twice counts once
//!
//! The check has no side effects and is safe to repeat.

use super::authority_set::AuthoritySet;
use super::entities::Authority;
use super::errors::GatewayError;
use rayon::prelude::*;
use shared_types::Hash;
use std::collections::BTreeSet;
use tracing::debug;

/// Majority threshold for a set of `n` authorities.
pub fn quorum_threshold(n: usize) -> Result<usize, GatewayError> {
    if n == 0 {
        return Err(GatewayError::EmptyAuthoritySet);
    }
    Ok(n / 2 + 1)
}

/// Proof that a quorum endorsed a digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endorsement {
    /// Distinct authorized signers, sorted.
    pub signers: BTreeSet<Authority>,
    /// Threshold that was required.
    pub threshold: usize,
}

/// Check that `signatures` over `digest` carry a quorum of `authorities`.
///
/// Recovery runs in parallel; the first malformed signature aborts the check
/// with `InvalidSignatureEncoding`.
pub fn check_authorized<S>(
    digest: &Hash,
    signatures: &[S],
    authorities: &AuthoritySet,
) -> Result<Endorsement, GatewayError>
where
    S: AsRef<[u8]> + Sync,
{
    let threshold = quorum_threshold(authorities.len())?;

    let recovered = signatures
        .par_iter()
        .map(|signature| shared_crypto::recover(digest, signature.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let signers: BTreeSet<Authority> = recovered
        .into_iter()
        .map(Authority::from)
        .filter(|signer| authorities.contains(signer))
        .collect();

    debug!(
        "[gateway] {} signatures, {} distinct authorized signers, threshold {}",
        signatures.len(),
        signers.len(),
        threshold
    );

    if signers.len() < threshold {
        return Err(GatewayError::QuorumNotMet {
            have: signers.len(),
            need: threshold,
        });
    }

    Ok(Endorsement { signers, threshold })
}
