//! # Gateway Node
//!
//! ```text
//! gateway-node <genesis.json> [<notice-hex> <signature-hex>...]
//! ```
//!
//! Opens the data directory from `GATEWAY_DATA_DIR` (default `./data`),
//! resuming from its snapshot or from `genesis.json`. When a notice is given,
//! it is submitted with the listed signatures and the outcome is logged.

use anyhow::{bail, Context, Result};
use custody_gateway::{InMemoryAccountingLedger, InMemoryAssetTransfer, NoticeGatewayApi};
use gateway_runtime::{init_tracing, GatewayNode, GenesisConfig, RuntimeConfig};
use std::path::PathBuf;
use tracing::{error, info};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env()?;
    init_tracing(&config.logging)?;

    let mut args = std::env::args().skip(1);
    let Some(genesis_path) = args.next().map(PathBuf::from) else {
        bail!("usage: gateway-node <genesis.json> [<notice-hex> <signature-hex>...]");
    };
    let genesis = GenesisConfig::load(&genesis_path)?;

    let mut node = GatewayNode::open(
        &config,
        &genesis,
        InMemoryAssetTransfer::new(),
        InMemoryAccountingLedger::new(),
    )?;

    info!("===========================================");
    info!("  Custody Gateway v{}", custody_gateway::VERSION);
    info!("  Chain: {}", config.gateway.chain);
    info!("  Era: {}", node.gateway().era());
    info!("  Authorities: {}", node.gateway().authorities().len());
    info!("  Cursor: {:?}", node.gateway().cursor().last());
    info!("===========================================");

    if let Some(notice_hex) = args.next() {
        let notice = hex::decode(notice_hex.trim_start_matches("0x"))
            .context("notice is not valid hex")?;
        let signatures = args
            .map(|s| hex::decode(s.trim_start_matches("0x")))
            .collect::<Result<Vec<_>, _>>()
            .context("signature is not valid hex")?;

        match node.submit_notice(&notice, &signatures) {
            Ok(receipt) => info!(
                "Notice {} applied at era {} ({} signers)",
                receipt.sequence, receipt.era, receipt.signers
            ),
            Err(e) => {
                error!("Notice failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
