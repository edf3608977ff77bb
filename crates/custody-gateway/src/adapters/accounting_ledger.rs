//! Accounting Ledger Adapter
//!
//! Principal-based balances: each holder's principal is fixed at mint time and
//! its present value grows with a global supply index.

use crate::ports::outbound::{AccountingError, AccountingLedger};
use parking_lot::RwLock;
use shared_types::Address;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Index value representing 1.0 (18 decimals).
pub const INDEX_ONE: u128 = 1_000_000_000_000_000_000;

/// In-memory accounting ledger.
pub struct InMemoryAccountingLedger {
    principals: RwLock<HashMap<Address, u128>>,
    index: RwLock<u128>,
    failing: AtomicBool,
}

impl InMemoryAccountingLedger {
    /// Empty ledger at index 1.0.
    pub fn new() -> Self {
        Self {
            principals: RwLock::new(HashMap::new()),
            index: RwLock::new(INDEX_ONE),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent mint fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Set the supply index.
    pub fn set_index(&self, index: u128) {
        *self.index.write() = index;
    }

    /// Current supply index.
    pub fn index(&self) -> u128 {
        *self.index.read()
    }

    /// Principal held by `holder`.
    pub fn principal(&self, holder: &Address) -> u128 {
        self.principals.read().get(holder).copied().unwrap_or(0)
    }

    /// `principal × index / 10^18`, saturating.
    pub fn present_value(&self, holder: &Address) -> u128 {
        let principal = self.principal(holder);
        let index = self.index();
        let whole = (principal / INDEX_ONE).saturating_mul(index);
        let frac = (principal % INDEX_ONE).saturating_mul(index) / INDEX_ONE;
        whole.saturating_add(frac)
    }

    /// Sum of all principal.
    pub fn total_principal(&self) -> u128 {
        self.principals
            .read()
            .values()
            .fold(0u128, |acc, p| acc.saturating_add(*p))
    }
}

impl Default for InMemoryAccountingLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountingLedger for InMemoryAccountingLedger {
    fn mint(&self, holder: Address, principal: u128) -> Result<(), AccountingError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AccountingError::Unavailable("ledger offline".to_string()));
        }

        let mut principals = self.principals.write();
        let current = principals.get(&holder).copied().unwrap_or(0);
        let next = current
            .checked_add(principal)
            .ok_or(AccountingError::Overflow(holder))?;
        principals.insert(holder, next);

        debug!("[gateway] Principal of {} now {}", holder, next);
        Ok(())
    }
}
