//! # Authority Set
//!
//! The federated signer set plus its rotation counter (era).
//!
//! ## Invariants
//!
//! - Non-empty at all times after construction
//! - Members are unique; order is the order they were supplied in
//! - `era` starts at 0 and only ever increases, by exactly 1 per rotation

use super::entities::Authority;
use super::errors::GatewayError;
use super::verifier::quorum_threshold;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Current signer set and era.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoritySet {
    authorities: Vec<Authority>,
    era: u64,
}

impl AuthoritySet {
    /// Create the era-0 set.
    pub fn genesis(authorities: Vec<Authority>) -> Result<Self, GatewayError> {
        Self::validate_members(&authorities)?;
        Ok(Self {
            authorities,
            era: 0,
        })
    }

    /// Reject empty or duplicated member lists.
    pub fn validate_members(authorities: &[Authority]) -> Result<(), GatewayError> {
        if authorities.is_empty() {
            return Err(GatewayError::EmptyAuthoritySet);
        }
        let mut seen = HashSet::with_capacity(authorities.len());
        for authority in authorities {
            if !seen.insert(authority) {
                return Err(GatewayError::DuplicateAuthority(*authority));
            }
        }
        Ok(())
    }

    /// Re-check invariants on a set that did not come through a constructor
    /// (e.g. deserialized from a snapshot).
    pub fn validate(&self) -> Result<(), GatewayError> {
        Self::validate_members(&self.authorities)
    }

    /// Replace the members and advance the era by one.
    ///
    /// On error the set is unchanged.
    pub(crate) fn rotate(&mut self, next: Vec<Authority>) -> Result<u64, GatewayError> {
        Self::validate_members(&next)?;
        let era = self.era.checked_add(1).ok_or(GatewayError::EraOverflow)?;
        self.authorities = next;
        self.era = era;
        Ok(era)
    }

    /// Rotation counter.
    pub fn era(&self) -> u64 {
        self.era
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.authorities.len()
    }

    /// Always false for a validated set.
    pub fn is_empty(&self) -> bool {
        self.authorities.is_empty()
    }

    /// Membership test.
    pub fn contains(&self, authority: &Authority) -> bool {
        self.authorities.contains(authority)
    }

    /// Members in order.
    pub fn as_slice(&self) -> &[Authority] {
        &self.authorities
    }

    /// Iterate over members.
    pub fn iter(&self) -> impl Iterator<Item = &Authority> {
        self.authorities.iter()
    }

    /// Distinct signers required for this set.
    pub fn quorum(&self) -> Result<usize, GatewayError> {
        quorum_threshold(self.len())
    }
}
