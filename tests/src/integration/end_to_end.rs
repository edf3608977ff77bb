//! # End-to-End Notice Flow
//!
//! Authorities {A, B, C}, quorum 2, 100 of asset X in custody:
//!
//! 1. N1 unlocks 40 of X to R → custody 60, R holds 40, cursor 1
//! 2. N1 again → already processed
//! 3. Sequence 3 → out of order
//! 4. Rotation to {} → empty authority set, nothing changes
//! 5. Rotation to {D, E} → era 1; era-0 notices now fail

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use custody_gateway::{quorum_threshold, GatewayError, NoticeGatewayApi, NoticeKind};

    #[test]
    fn test_full_scenario() {
        let mut h = harness(&[A, B, C], 100);
        assert_eq!(h.gateway.authorities().quorum().unwrap(), 2);

        // 1. N1 with 2 of 3 signatures
        let n1 = unlock_notice(0, 1, 40);
        let n1_sigs = sign(&n1, &[A, B]);
        let receipt = h.gateway.execute_notice(&n1.encode(), &n1_sigs).unwrap();
        assert_eq!(receipt.kind, NoticeKind::Unlock);
        assert_eq!(h.gateway.custody_balance(&asset_x()), 60);
        assert_eq!(h.transfer.received(&recipient_r(), &asset_x()), 40);
        assert_eq!(h.gateway.cursor().last(), Some(1));

        // 2. Replay
        assert!(matches!(
            h.gateway.execute_notice(&n1.encode(), &n1_sigs),
            Err(GatewayError::NoticeAlreadyProcessed { sequence: 1, cursor: 1 })
        ));

        // 3. Gap
        let n3 = unlock_notice(0, 3, 1);
        assert_eq!(
            h.gateway.execute_notice(&n3.encode(), &sign(&n3, &[A, B])),
            Err(GatewayError::NoticeOutOfOrder {
                expected: 2,
                actual: 3
            })
        );

        // 4. Empty rotation
        let empty = rotation_notice(0, 2, &[]);
        assert_eq!(
            h.gateway.execute_notice(&empty.encode(), &sign(&empty, &[A, B])),
            Err(GatewayError::EmptyAuthoritySet)
        );
        assert_eq!(h.gateway.era(), 0);
        assert_eq!(h.gateway.cursor().last(), Some(1));

        // 5. Rotate to {D, E}
        let rotate = rotation_notice(0, 2, &[D, E]);
        h.gateway
            .execute_notice(&rotate.encode(), &sign(&rotate, &[A, C]))
            .unwrap();
        assert_eq!(h.gateway.era(), 1);
        assert_eq!(h.gateway.authorities().as_slice(), &authorities(&[D, E])[..]);
        assert_eq!(h.gateway.cursor().last(), Some(2));

        let stale = unlock_notice(0, 3, 1);
        assert_eq!(
            h.gateway.execute_notice(&stale.encode(), &sign(&stale, &[A, B, C])),
            Err(GatewayError::EraMismatch {
                expected: 1,
                actual: 0
            })
        );

        // New set needs both of its two members
        let n3 = unlock_notice(1, 3, 10);
        assert_eq!(quorum_threshold(2).unwrap(), 2);
        assert_eq!(
            h.gateway.execute_notice(&n3.encode(), &sign(&n3, &[D])),
            Err(GatewayError::QuorumNotMet { have: 1, need: 2 })
        );
        h.gateway
            .execute_notice(&n3.encode(), &sign(&n3, &[D, E]))
            .unwrap();
        assert_eq!(h.gateway.custody_balance(&asset_x()), 50);
        assert_eq!(h.transfer.received(&recipient_r(), &asset_x()), 50);
    }

    #[test]
    fn test_quorum_boundaries() {
        for (n, expected) in [(1, 1), (2, 2), (3, 2), (4, 3), (5, 3), (6, 4), (7, 4), (100, 51)] {
            assert_eq!(quorum_threshold(n).unwrap(), expected, "n = {n}");
        }
        assert_eq!(quorum_threshold(0), Err(GatewayError::EmptyAuthoritySet));
    }

    #[test]
    fn test_lock_then_unlock_everything() {
        let mut h = harness(&[A], 0);
        h.gateway.lock(asset_x(), 30, recipient_r()).unwrap();
        h.gateway.lock(asset_x(), 12, recipient_r()).unwrap();

        let n1 = unlock_notice(0, 1, 42);
        h.gateway.execute_notice(&n1.encode(), &sign(&n1, &[A])).unwrap();
        assert_eq!(h.gateway.custody_balance(&asset_x()), 0);

        let n2 = unlock_notice(0, 2, 1);
        assert!(matches!(
            h.gateway.execute_notice(&n2.encode(), &sign(&n2, &[A])),
            Err(GatewayError::InsufficientCustody { requested: 1, available: 0, .. })
        ));
    }

    #[test]
    fn test_mint_reaches_ledger() {
        let mut h = harness(&[A, B, C], 0);
        let holder = recipient_r();

        let n1 = mint_notice(0, 1, holder, 1_000);
        h.gateway.execute_notice(&n1.encode(), &sign(&n1, &[B, C])).unwrap();
        let n2 = mint_notice(0, 2, holder, 500);
        h.gateway.execute_notice(&n2.encode(), &sign(&n2, &[A, C])).unwrap();

        assert_eq!(h.ledger.principal(&holder), 1_500);
        assert_eq!(h.ledger.present_value(&holder), 1_500);
        assert_eq!(h.gateway.cursor().last(), Some(2));
    }

    #[test]
    fn test_extra_signatures_are_fine() {
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 1);
        let receipt = h
            .gateway
            .execute_notice(&n1.encode(), &sign(&n1, &[A, B, C, MALLORY]))
            .unwrap();
        assert_eq!(receipt.signers, 3);
    }
}
