//! # Genesis Module
//!
//! Initial gateway state for a fresh data directory.
//!
//! ## Initialization Sequence
//!
//! 1. Load `GenesisConfig` from JSON
//! 2. Validate the authority list (non-empty, no duplicates)
//! 3. Seed custody balances
//! 4. Produce an era-0 `GatewayState` with nothing processed

pub mod builder;

pub use builder::{CustodyEntry, GenesisBuilder, GenesisConfig, GenesisError};
