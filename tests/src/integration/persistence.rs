//! # Runtime Persistence
//!
//! `GatewayNode` saves after every committed change and resumes from its
//! snapshot, so replay protection survives restarts.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use custody_gateway::{
        GatewayError, InMemoryAccountingLedger, InMemoryAssetTransfer, NoticeGatewayApi,
    };
    use gateway_runtime::{
        CustodyEntry, GatewayNode, GenesisConfig, NodeError, RuntimeConfig, SnapshotStore,
    };
    use shared_types::ChainId;
    use tempfile::TempDir;

    type Node = GatewayNode<InMemoryAssetTransfer, InMemoryAccountingLedger>;

    fn config(dir: &TempDir) -> RuntimeConfig {
        let mut config = RuntimeConfig::default();
        config.storage.data_dir = dir.path().to_path_buf();
        config
    }

    fn genesis() -> GenesisConfig {
        GenesisConfig {
            chain: ChainId::Eth,
            authorities: [A, B, C].iter().map(|s| authority(*s).address()).collect(),
            custody: vec![CustodyEntry {
                asset: asset_x().0,
                amount: 100,
            }],
        }
    }

    fn open(config: &RuntimeConfig) -> Node {
        GatewayNode::open(
            config,
            &genesis(),
            InMemoryAssetTransfer::new(),
            InMemoryAccountingLedger::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_node_starts_from_genesis() {
        let dir = TempDir::new().unwrap();
        let node = open(&config(&dir));
        assert_eq!(node.gateway().era(), 0);
        assert_eq!(node.gateway().custody_balance(&asset_x()), 100);
        assert!(node.store().path().exists());
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let n1 = unlock_notice(0, 1, 40);
        let sigs = sign(&n1, &[A, B]);

        {
            let mut node = open(&config);
            node.submit_notice(&n1.encode(), &sigs).unwrap();
            node.lock(asset_x(), 5, recipient_r()).unwrap();
        }

        let mut node = open(&config);
        assert_eq!(node.gateway().custody_balance(&asset_x()), 65);
        assert_eq!(node.gateway().cursor().last(), Some(1));
        assert!(matches!(
            node.submit_notice(&n1.encode(), &sigs),
            Err(NodeError::Gateway(GatewayError::NoticeAlreadyProcessed { .. }))
        ));
    }

    #[test]
    fn test_rotation_survives_restart() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        {
            let mut node = open(&config);
            let rotate = rotation_notice(0, 1, &[D, E]);
            node.submit_notice(&rotate.encode(), &sign(&rotate, &[B, C]))
                .unwrap();
        }

        let mut node = open(&config);
        assert_eq!(node.gateway().era(), 1);
        let stale = unlock_notice(0, 2, 1);
        assert!(matches!(
            node.submit_notice(&stale.encode(), &sign(&stale, &[A, B])),
            Err(NodeError::Gateway(GatewayError::EraMismatch { .. }))
        ));
    }

    #[test]
    fn test_rejected_notice_not_persisted() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        {
            let mut node = open(&config);
            let n1 = unlock_notice(0, 1, 40);
            assert!(node.submit_notice(&n1.encode(), &sign(&n1, &[A])).is_err());
        }

        let store = SnapshotStore::open(&config.storage.data_dir, &config.storage.snapshot_file)
            .unwrap();
        let state = store.load().unwrap().unwrap();
        assert_eq!(state.cursor().last(), None);
        assert_eq!(state.custody_balance(&asset_x()), 100);
    }

    #[test]
    fn test_second_node_on_same_dir_refused() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let _node = open(&config);

        let second = Node::open(
            &config,
            &genesis(),
            InMemoryAssetTransfer::new(),
            InMemoryAccountingLedger::new(),
        );
        assert!(second.is_err());
    }

    #[test]
    fn test_genesis_chain_must_match_config() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.gateway.chain = ChainId::Tez;

        let result = Node::open(
            &config,
            &genesis(),
            InMemoryAssetTransfer::new(),
            InMemoryAccountingLedger::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_signature_cap_below_quorum_refused_at_open() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.gateway.max_signatures = 1;

        let err = Node::open(
            &config,
            &genesis(),
            InMemoryAssetTransfer::new(),
            InMemoryAccountingLedger::new(),
        )
        .err()
        .unwrap();
        assert_eq!(
            err.downcast_ref::<GatewayError>(),
            Some(&GatewayError::QuorumExceedsSignatureLimit { quorum: 2, max: 1 })
        );
        assert!(!dir.path().join(&config.storage.snapshot_file).exists());

        // Same refusal when resuming a saved set under a lowered cap.
        config.gateway.max_signatures = 256;
        drop(open(&config));
        config.gateway.max_signatures = 1;
        let resumed = Node::open(
            &config,
            &genesis(),
            InMemoryAssetTransfer::new(),
            InMemoryAccountingLedger::new(),
        );
        assert!(resumed.is_err());
    }

    #[test]
    fn test_failed_save_halts_until_flushed() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        let mut node = open(&config);

        std::fs::remove_dir_all(dir.path()).unwrap();
        let n1 = unlock_notice(0, 1, 40);
        assert!(matches!(
            node.submit_notice(&n1.encode(), &sign(&n1, &[A, B])),
            Err(NodeError::Storage(_))
        ));
        assert!(node.is_unsaved());
        assert_eq!(node.gateway().cursor().last(), Some(1));

        let n2 = unlock_notice(0, 2, 10);
        assert!(matches!(
            node.submit_notice(&n2.encode(), &sign(&n2, &[A, B])),
            Err(NodeError::Unsaved(_))
        ));
        assert!(matches!(
            node.lock(asset_x(), 5, recipient_r()),
            Err(NodeError::Unsaved(_))
        ));
        assert_eq!(node.gateway().cursor().last(), Some(1));
        assert_eq!(node.gateway().custody_balance(&asset_x()), 60);

        std::fs::create_dir_all(dir.path()).unwrap();
        node.submit_notice(&n2.encode(), &sign(&n2, &[A, B]))
            .unwrap();
        assert!(!node.is_unsaved());
        drop(node);

        let node = open(&config);
        assert_eq!(node.gateway().cursor().last(), Some(2));
        assert_eq!(node.gateway().custody_balance(&asset_x()), 50);
    }
}
