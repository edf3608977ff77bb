//! # Authority Rotation
//!
//! Successive rotations, era monotonicity and the handover of signing power.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use custody_gateway::{Authority, GatewayError, Notice, NoticeGatewayApi, NoticePayload};
    use shared_types::{Address, ChainId};

    #[test]
    fn test_chain_of_rotations() {
        let mut h = harness(&[A, B, C], 100);
        let sets: [&[u8]; 3] = [&[B, C, D], &[D, E], &[A]];
        let mut signers: &[u8] = &[A, B];

        for (i, next) in sets.iter().enumerate() {
            let era = i as u64;
            let notice = rotation_notice(era, era + 1, next);
            h.gateway
                .execute_notice(&notice.encode(), &sign(&notice, signers))
                .unwrap();
            assert_eq!(h.gateway.era(), era + 1);
            signers = *next;
        }

        assert_eq!(h.gateway.era(), 3);
        assert_eq!(h.gateway.authorities().as_slice(), &authorities(&[A])[..]);

        let n = unlock_notice(3, 4, 5);
        h.gateway.execute_notice(&n.encode(), &sign(&n, &[A])).unwrap();
        assert_eq!(h.gateway.custody_balance(&asset_x()), 95);
    }

    #[test]
    fn test_rotation_to_same_set_still_bumps_era() {
        let mut h = harness(&[A, B], 0);
        let notice = rotation_notice(0, 1, &[A, B]);
        h.gateway
            .execute_notice(&notice.encode(), &sign(&notice, &[A, B]))
            .unwrap();
        assert_eq!(h.gateway.era(), 1);
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let mut h = harness(&[A, B, C], 0);
        let notice = rotation_notice(0, 1, &[D, D]);
        assert_eq!(
            h.gateway
                .execute_notice(&notice.encode(), &sign(&notice, &[A, B])),
            Err(GatewayError::DuplicateAuthority(authority(D)))
        );
        assert_eq!(h.gateway.era(), 0);
        assert_eq!(h.gateway.cursor().last(), None);
    }

    #[test]
    fn test_outgoing_set_signs_handover() {
        // The incoming set cannot authorize its own installation.
        let mut h = harness(&[A, B, C], 0);
        let notice = rotation_notice(0, 1, &[D, E]);
        assert_eq!(
            h.gateway
                .execute_notice(&notice.encode(), &sign(&notice, &[D, E])),
            Err(GatewayError::QuorumNotMet { have: 0, need: 2 })
        );
    }

    #[test]
    fn test_oversized_rotation_cannot_lock_out_the_bridge() {
        let mut h = harness(&[A], 100);
        let quorum_cap = h.gateway.config().max_signatures;
        let members: Vec<Authority> = (0..(quorum_cap as u16) * 2 + 1)
            .map(|i| {
                let mut bytes = [0x20; 20];
                bytes[18..].copy_from_slice(&i.to_be_bytes());
                Authority(Address(bytes))
            })
            .collect();
        let notice = Notice::new(
            ChainId::Eth,
            0,
            1,
            &NoticePayload::ChangeAuthorities {
                authorities: members,
            },
        );
        assert_eq!(
            h.gateway.execute_notice(&notice.encode(), &sign(&notice, &[A])),
            Err(GatewayError::QuorumExceedsSignatureLimit {
                quorum: quorum_cap + 1,
                max: quorum_cap
            })
        );

        // The cursor did not move, so the same sequence still rotates to a
        // set the cap can serve.
        let notice = rotation_notice(0, 1, &[B, C, D]);
        h.gateway
            .execute_notice(&notice.encode(), &sign(&notice, &[A]))
            .unwrap();
        let n = unlock_notice(1, 2, 10);
        h.gateway
            .execute_notice(&n.encode(), &sign(&n, &[B, D]))
            .unwrap();
        assert_eq!(h.gateway.custody_balance(&asset_x()), 90);
    }
}
