//! # Domain Layer
//!
//! Pure gateway logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod authority_set;
pub mod capability;
pub mod custody;
pub mod entities;
pub mod errors;
pub mod notice;
pub mod payload;
pub mod state;
pub mod verifier;

pub use authority_set::AuthoritySet;
pub use capability::{Caller, DispatchTicket};
pub use custody::CustodyLedger;
pub use entities::*;
pub use errors::GatewayError;
pub use notice::{Notice, NoticeHeader, NoticeKind, HEADER_LEN, NOTICE_VERSION};
pub use payload::NoticePayload;
pub use state::GatewayState;
pub use verifier::{check_authorized, quorum_threshold, Endorsement};
