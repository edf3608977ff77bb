//! # Shared Types Crate
//!
//! Identity and chain primitives used across the gateway workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: addresses, hashes and chain selectors are
//!   defined once here and re-used by every crate.
//! - **Explicit Parsing**: textual forms (`0x…`, `ETH`) parse through
//!   `FromStr` and fail with a classified [`ParseError`], never a default.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
