//! # Genesis State Builder
//!
//! Creates and validates the initial gateway state.

use custody_gateway::{
    AssetId, Authority, AuthoritySet, CustodyLedger, GatewayError, GatewayState,
};
use serde::{Deserialize, Serialize};
use shared_types::{Address, ChainId};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Genesis creation errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Genesis file could not be read.
    #[error("Failed to read genesis file {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Genesis JSON did not parse.
    #[error("Failed to parse genesis: {0}")]
    Parse(#[from] serde_json::Error),

    /// Genesis content violates a gateway invariant.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(#[from] GatewayError),
}

/// Initial custody balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustodyEntry {
    /// Asset token address.
    pub asset: Address,
    /// Amount already held.
    pub amount: u128,
}

/// Genesis configuration.
///
/// ```json
/// {
///   "chain": "ETH",
///   "authorities": ["0x…", "0x…"],
///   "custody": [{ "asset": "0x…", "amount": 100 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Chain the gateway serves.
    #[serde(default)]
    pub chain: ChainId,
    /// Era-0 authority addresses.
    pub authorities: Vec<Address>,
    /// Balances already in custody.
    #[serde(default)]
    pub custody: Vec<CustodyEntry>,
}

impl GenesisConfig {
    /// Devnet genesis: the given authorities on Ethereum, empty custody.
    pub fn devnet(authorities: Vec<Address>) -> Self {
        Self {
            chain: ChainId::Eth,
            authorities,
            custody: Vec::new(),
        }
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> Result<Self, GenesisError> {
        let json = std::fs::read_to_string(path).map_err(|source| GenesisError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Era-0 authorities as typed identities.
    pub fn authority_list(&self) -> Vec<Authority> {
        self.authorities.iter().copied().map(Authority::from).collect()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        AuthoritySet::validate_members(&self.authority_list())?;
        Ok(())
    }
}

/// Builds the era-0 state from a [`GenesisConfig`].
pub struct GenesisBuilder {
    config: GenesisConfig,
}

impl GenesisBuilder {
    /// Create a builder.
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Validate and build.
    pub fn build(&self) -> Result<GatewayState, GenesisError> {
        self.config.validate()?;

        let authorities = AuthoritySet::genesis(self.config.authority_list())?;

        let mut custody = CustodyLedger::new();
        for entry in &self.config.custody {
            custody.credit(AssetId(entry.asset), entry.amount)?;
        }

        info!(
            "[gateway] Genesis for {}: {} authorities (quorum {}), {} custodied assets",
            self.config.chain,
            authorities.len(),
            authorities.quorum()?,
            custody.iter().count()
        );

        Ok(GatewayState::genesis(authorities, custody))
    }
}
