//! # Signature Attacks
//!
//! Forged endorsements, padded signer lists, malleated and malformed
//! signatures, and endorsements lifted from a different notice.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use custody_gateway::{GatewayError, NoticeGatewayApi};
    use shared_crypto::ecdsa::invert_s;
    use shared_crypto::{RecoverableSignature, SignatureError};

    #[test]
    fn test_outsider_signatures_do_not_count() {
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 100);
        assert_eq!(
            h.gateway
                .execute_notice(&n1.encode(), &sign(&n1, &[MALLORY, 0x67, 0x68])),
            Err(GatewayError::QuorumNotMet { have: 0, need: 2 })
        );
        assert_eq!(h.gateway.custody_balance(&asset_x()), 100);
    }

    #[test]
    fn test_repeated_signer_counts_once() {
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 100);
        assert_eq!(
            h.gateway
                .execute_notice(&n1.encode(), &sign(&n1, &[A, A, A, A])),
            Err(GatewayError::QuorumNotMet { have: 1, need: 2 })
        );
    }

    #[test]
    fn test_one_member_plus_outsider_fails() {
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 100);
        assert_eq!(
            h.gateway
                .execute_notice(&n1.encode(), &sign(&n1, &[A, MALLORY])),
            Err(GatewayError::QuorumNotMet { have: 1, need: 2 })
        );
    }

    #[test]
    fn test_malleated_signature_rejected() {
        // Flip s to n - s: a valid signature for the same key, but high-S.
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 100);
        let digest = n1.digest();
        let original = keypair(A).sign_digest(&digest).unwrap();
        let malleated = RecoverableSignature {
            r: original.r,
            s: invert_s(&original.s),
            v: if original.v == 27 { 28 } else { 27 },
        };

        let sigs = vec![malleated.to_vec(), sign(&n1, &[B]).remove(0)];
        assert_eq!(
            h.gateway.execute_notice(&n1.encode(), &sigs),
            Err(GatewayError::InvalidSignatureEncoding(
                SignatureError::MalleableSignature
            ))
        );
    }

    #[test]
    fn test_malformed_signature_poisons_batch() {
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 100);
        let mut sigs = sign(&n1, &[A, B, C]);
        sigs[2].truncate(64);

        assert!(matches!(
            h.gateway.execute_notice(&n1.encode(), &sigs),
            Err(GatewayError::InvalidSignatureEncoding(
                SignatureError::InvalidLength { .. }
            ))
        ));
    }

    #[test]
    fn test_bad_recovery_id_rejected() {
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 100);
        let mut sigs = sign(&n1, &[A, B]);
        sigs[0][64] = 35;

        assert_eq!(
            h.gateway.execute_notice(&n1.encode(), &sigs),
            Err(GatewayError::InvalidSignatureEncoding(
                SignatureError::InvalidRecoveryId(35)
            ))
        );
    }

    #[test]
    fn test_signatures_lifted_from_other_notice() {
        // Endorsements for a 1-unit unlock reused on a 100-unit unlock.
        let mut h = harness(&[A, B, C], 100);
        let small = unlock_notice(0, 1, 1);
        let large = unlock_notice(0, 1, 100);

        assert_eq!(
            h.gateway
                .execute_notice(&large.encode(), &sign(&small, &[A, B, C])),
            Err(GatewayError::QuorumNotMet { have: 0, need: 2 })
        );
    }

    #[test]
    fn test_signature_flood_capped() {
        let mut h = harness(&[A, B, C], 100);
        let n1 = unlock_notice(0, 1, 1);
        let one = sign(&n1, &[A]).remove(0);
        let flood = vec![one; 257];

        assert_eq!(
            h.gateway.execute_notice(&n1.encode(), &flood),
            Err(GatewayError::TooManySignatures { max: 256, got: 257 })
        );
    }

    #[test]
    fn test_no_signatures() {
        let mut h = harness(&[A], 100);
        let n1 = unlock_notice(0, 1, 1);
        let none: Vec<Vec<u8>> = Vec::new();
        assert_eq!(
            h.gateway.execute_notice(&n1.encode(), &none),
            Err(GatewayError::QuorumNotMet { have: 0, need: 1 })
        );
    }
}
