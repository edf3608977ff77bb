//! # Notice Gateway Service
//!
//! Application service implementing `NoticeGatewayApi`.
//!
//! ## Notice Pipeline
//!
//! ```text
//! bytes ──► parse ──► chain ──► era ──► sequence ──► quorum ──► stage
//!                                                                │
//!            commit ◄── close ◄── dispatch(handler) ◄── advance ◄┘
//! ```
//!
//! Steps up to the quorum check only read committed state. The rest runs on a
//! staged copy which replaces the committed state only if the handler
//! succeeds, so a failing notice leaves no trace, cursor included.

use crate::domain::{
    check_authorized, AssetId, AuthoritySet, Caller, GatewayConfig, GatewayError, GatewayState,
    Notice, NoticePayload, ProcessedCursor,
};
use crate::handlers;
use crate::ports::inbound::{NoticeGatewayApi, NoticeReceipt};
use crate::ports::outbound::{AccountingLedger, AssetTransfer};
use shared_types::Address;
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Custody gateway: the only path into the privileged handlers.
pub struct NoticeGateway<T: AssetTransfer, L: AccountingLedger> {
    config: GatewayConfig,
    state: GatewayState,
    transfer: T,
    ledger: L,
}

impl<T: AssetTransfer, L: AccountingLedger> NoticeGateway<T, L> {
    /// Wrap an existing state. The state is validated first, and its set's
    /// quorum must fit under `config.max_signatures`.
    pub fn new(
        config: GatewayConfig,
        state: GatewayState,
        transfer: T,
        ledger: L,
    ) -> Result<Self, GatewayError> {
        state.validate()?;
        config.check_set_size(state.authorities().len())?;
        info!(
            "[gateway] Serving {} at era {} ({} authorities, cursor {:?})",
            config.chain,
            state.era(),
            state.authorities().len(),
            state.cursor().last()
        );
        Ok(Self {
            config,
            state,
            transfer,
            ledger,
        })
    }

    /// Configuration in effect.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Committed state.
    pub fn state(&self) -> &GatewayState {
        &self.state
    }

    /// Give the committed state back.
    pub fn into_state(self) -> GatewayState {
        self.state
    }

    /// Transfer port.
    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Accounting port.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Checks that read committed state only. Returns the parsed notice and
    /// the number of distinct authorized signers.
    fn admit<S: AsRef<[u8]> + Sync>(
        &self,
        bytes: &[u8],
        signatures: &[S],
    ) -> Result<(Notice, usize), GatewayError> {
        let notice = Notice::decode(bytes)?;
        let header = notice.header;

        if header.chain != self.config.chain {
            return Err(GatewayError::ChainMismatch {
                expected: self.config.chain,
                actual: header.chain,
            });
        }

        let era = self.state.era();
        if header.era != era {
            return Err(GatewayError::EraMismatch {
                expected: era,
                actual: header.era,
            });
        }

        let cursor = self.state.cursor();
        let Some(expected) = cursor.next_expected() else {
            return Err(GatewayError::NoticeAlreadyProcessed {
                sequence: header.sequence,
                cursor: u64::MAX,
            });
        };
        match header.sequence.cmp(&expected) {
            Ordering::Equal => {}
            Ordering::Less => {
                return Err(GatewayError::NoticeAlreadyProcessed {
                    sequence: header.sequence,
                    cursor: cursor.last().unwrap_or(0),
                })
            }
            Ordering::Greater => {
                return Err(GatewayError::NoticeOutOfOrder {
                    expected,
                    actual: header.sequence,
                })
            }
        }

        if signatures.len() > self.config.max_signatures {
            return Err(GatewayError::TooManySignatures {
                max: self.config.max_signatures,
                got: signatures.len(),
            });
        }

        let endorsement = check_authorized(&notice.digest(), signatures, self.state.authorities())?;
        Ok((notice, endorsement.signers.len()))
    }

    /// Run `apply` against a copy of the state with the dispatch window for
    /// `sequence` open, committing only on success.
    fn staged<F>(&mut self, sequence: Option<u64>, apply: F) -> Result<(), GatewayError>
    where
        F: FnOnce(&mut GatewayState, &GatewayConfig, &T, &L) -> Result<(), GatewayError>,
    {
        let mut staged = self.state.clone();
        if let Some(sequence) = sequence {
            staged.begin_dispatch(sequence);
        }
        let result = apply(&mut staged, &self.config, &self.transfer, &self.ledger);
        staged.end_dispatch();

        if result.is_ok() {
            self.state = staged;
        }
        result
    }

    fn apply_notice<S: AsRef<[u8]> + Sync>(
        &mut self,
        bytes: &[u8],
        signatures: &[S],
    ) -> Result<NoticeReceipt, GatewayError> {
        let (notice, signers) = self.admit(bytes, signatures)?;
        let header = notice.header;
        debug!(
            "[gateway] Notice {:?} admitted with {} signers",
            notice.id(),
            signers
        );

        self.staged(Some(header.sequence), |state, config, transfer, ledger| {
            let payload = notice.payload()?;
            let caller = Caller::dispatcher(header.sequence);
            handlers::dispatch(&caller, state, config, transfer, ledger, payload)
        })?;

        Ok(NoticeReceipt {
            era: header.era,
            sequence: header.sequence,
            kind: header.kind,
            signers,
        })
    }
}

impl<T: AssetTransfer, L: AccountingLedger> NoticeGatewayApi for NoticeGateway<T, L> {
    fn execute_notice<S: AsRef<[u8]> + Sync>(
        &mut self,
        notice: &[u8],
        signatures: &[S],
    ) -> Result<NoticeReceipt, GatewayError> {
        match self.apply_notice(notice, signatures) {
            Ok(receipt) => {
                info!(
                    "[gateway] Applied {} notice (era {}, sequence {}, {} signers)",
                    receipt.kind, receipt.era, receipt.sequence, receipt.signers
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!("[gateway] Notice rejected: {}", e);
                Err(e)
            }
        }
    }

    fn lock(&mut self, asset: AssetId, amount: u128, sender: Address) -> Result<u128, GatewayError> {
        let mut balance = 0;
        self.staged(None, |state, _, _, _| {
            balance = handlers::lock(state, asset, amount, sender)?;
            Ok(())
        })?;
        Ok(balance)
    }

    fn invoke(&mut self, caller: Caller, payload: NoticePayload) -> Result<(), GatewayError> {
        let kind = payload.kind();
        let result = self.staged(None, |state, config, transfer, ledger| {
            handlers::dispatch(&caller, state, config, transfer, ledger, payload)
        });
        if let Err(e) = &result {
            warn!("[gateway] Direct {} call rejected: {}", kind, e);
        }
        result
    }

    fn era(&self) -> u64 {
        self.state.era()
    }

    fn authorities(&self) -> &AuthoritySet {
        self.state.authorities()
    }

    fn cursor(&self) -> ProcessedCursor {
        self.state.cursor()
    }

    fn custody_balance(&self, asset: &AssetId) -> u128 {
        self.state.custody_balance(asset)
    }
}
