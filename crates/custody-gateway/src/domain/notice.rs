//! # Notices
//!
//! A notice is an immutable, sequenced instruction. Its identity is
//! `(era, sequence)`; its digest is Keccak-256 over the exact encoded bytes.
//!
//! ## Header Layout (big-endian)
//!
//! ```text
//! 0      1      2            10           18     19
//! +------+------+------------+------------+------+---------------
//! | ver  | chain|    era     |  sequence  | kind | body ...
//! +------+------+------------+------------+------+---------------
//! ```
//!
//! The body stays opaque until dispatch.

use super::errors::GatewayError;
use super::payload::NoticePayload;
use shared_crypto::keccak256_many;
use shared_types::{ChainId, Hash};
use std::fmt;

/// Only supported header format.
pub const NOTICE_VERSION: u8 = 1;

/// Encoded header size in bytes.
pub const HEADER_LEN: usize = 19;

/// Which privileged handler a notice targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Release custodied assets to a recipient.
    Unlock,
    /// Credit principal in the accounting ledger.
    Mint,
    /// Rotate the authority set.
    ChangeAuthorities,
}

impl NoticeKind {
    /// Wire byte.
    pub fn as_byte(self) -> u8 {
        match self {
            NoticeKind::Unlock => 1,
            NoticeKind::Mint => 2,
            NoticeKind::ChangeAuthorities => 3,
        }
    }

    /// Inverse of [`NoticeKind::as_byte`].
    pub fn from_byte(byte: u8) -> Result<Self, GatewayError> {
        match byte {
            1 => Ok(NoticeKind::Unlock),
            2 => Ok(NoticeKind::Mint),
            3 => Ok(NoticeKind::ChangeAuthorities),
            other => Err(GatewayError::MalformedNotice(format!(
                "unknown notice kind {other}"
            ))),
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoticeKind::Unlock => "unlock",
            NoticeKind::Mint => "mint",
            NoticeKind::ChangeAuthorities => "change-authorities",
        };
        f.write_str(name)
    }
}

/// Parsed notice header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeHeader {
    /// Chain the notice is addressed to.
    pub chain: ChainId,
    /// Authority-set era the notice was signed against.
    pub era: u64,
    /// Gap-free, per-chain sequence number (starts at 1).
    pub sequence: u64,
    /// Target handler.
    pub kind: NoticeKind,
}

impl NoticeHeader {
    /// Parse the fixed-size header from the front of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self, GatewayError> {
        if bytes.len() < HEADER_LEN {
            return Err(GatewayError::MalformedNotice(format!(
                "header needs {HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        if bytes[0] != NOTICE_VERSION {
            return Err(GatewayError::MalformedNotice(format!(
                "unsupported version {}",
                bytes[0]
            )));
        }

        let chain = ChainId::from_code(bytes[1])
            .map_err(|e| GatewayError::MalformedNotice(e.to_string()))?;
        let era = read_u64(&bytes[2..10]);
        let sequence = read_u64(&bytes[10..18]);
        let kind = NoticeKind::from_byte(bytes[18])?;

        if sequence == 0 {
            return Err(GatewayError::MalformedNotice(
                "sequence numbers start at 1".to_string(),
            ));
        }

        Ok(Self {
            chain,
            era,
            sequence,
            kind,
        })
    }

    /// Encode the header.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0] = NOTICE_VERSION;
        out[1] = self.chain.code();
        out[2..10].copy_from_slice(&self.era.to_be_bytes());
        out[10..18].copy_from_slice(&self.sequence.to_be_bytes());
        out[18] = self.kind.as_byte();
        out
    }
}

/// A header plus its opaque body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Parsed header.
    pub header: NoticeHeader,
    /// Handler arguments, decoded only at dispatch.
    pub body: Vec<u8>,
}

impl Notice {
    /// Build a notice carrying `payload`.
    pub fn new(chain: ChainId, era: u64, sequence: u64, payload: &NoticePayload) -> Self {
        Self {
            header: NoticeHeader {
                chain,
                era,
                sequence,
                kind: payload.kind(),
            },
            body: payload.encode_body(),
        }
    }

    /// Parse header and split off the body.
    pub fn decode(bytes: &[u8]) -> Result<Self, GatewayError> {
        let header = NoticeHeader::decode(bytes)?;
        Ok(Self {
            header,
            body: bytes[HEADER_LEN..].to_vec(),
        })
    }

    /// `header || body`.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.body.len());
        out.extend_from_slice(&self.header.encode());
        out.extend_from_slice(&self.body);
        out
    }

    /// The digest validators sign.
    pub fn digest(&self) -> Hash {
        keccak256_many(&[&self.header.encode()[..], &self.body[..]])
    }

    /// `(era, sequence)`.
    pub fn id(&self) -> (u64, u64) {
        (self.header.era, self.header.sequence)
    }

    /// Decode the body for this notice's kind.
    pub fn payload(&self) -> Result<NoticePayload, GatewayError> {
        NoticePayload::decode(self.header.kind, &self.body)
    }
}

pub(crate) fn read_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_be_bytes(buf)
}
