//! # Custody Ledger
//!
//! Per-asset balances held by the gateway. Increased by `lock`, decreased only
//! by authorized `unlock`. Never negative.

use super::entities::AssetId;
use super::errors::GatewayError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Custodied amount per asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyLedger {
    balances: BTreeMap<AssetId, u128>,
}

impl CustodyLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `asset` (zero if never seen).
    pub fn balance(&self, asset: &AssetId) -> u128 {
        self.balances.get(asset).copied().unwrap_or(0)
    }

    /// Add `amount` to `asset`. Returns the new balance.
    pub fn credit(&mut self, asset: AssetId, amount: u128) -> Result<u128, GatewayError> {
        let current = self.balance(&asset);
        let next = current
            .checked_add(amount)
            .ok_or(GatewayError::CustodyOverflow(asset))?;
        self.balances.insert(asset, next);
        Ok(next)
    }

    /// Remove `amount` from `asset`. Returns the new balance.
    pub fn debit(&mut self, asset: AssetId, amount: u128) -> Result<u128, GatewayError> {
        let available = self.balance(&asset);
        if amount > available {
            return Err(GatewayError::InsufficientCustody {
                asset,
                requested: amount,
                available,
            });
        }
        let next = available - amount;
        self.balances.insert(asset, next);
        Ok(next)
    }

    /// Sum across every asset, saturating.
    pub fn total(&self) -> u128 {
        self.balances
            .values()
            .fold(0u128, |acc, v| acc.saturating_add(*v))
    }

    /// Non-zero balances in asset order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &u128)> {
        self.balances.iter().filter(|(_, amount)| **amount > 0)
    }
}
