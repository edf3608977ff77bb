//! # Dispatch Capability
//!
//! Privileged handlers only run for a caller holding a [`DispatchTicket`].
//! Tickets can only be minted inside this crate, by the dispatcher, for the
//! notice it is currently applying. Everything else is [`Caller::External`].

/// Proof that the dispatcher is applying the notice with this sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct DispatchTicket {
    sequence: u64,
}

impl DispatchTicket {
    pub(crate) fn issue(sequence: u64) -> Self {
        Self { sequence }
    }

    /// Sequence of the notice being applied.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Who is asking for a state-changing operation.
#[derive(Debug, PartialEq, Eq)]
pub enum Caller {
    /// Any caller outside the notice dispatcher.
    External,
    /// The dispatcher itself, mid-notice.
    Dispatcher(DispatchTicket),
}

impl Caller {
    pub(crate) fn dispatcher(sequence: u64) -> Self {
        Caller::Dispatcher(DispatchTicket::issue(sequence))
    }
}
