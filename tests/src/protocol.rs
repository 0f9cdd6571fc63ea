//! End-to-end sign/verify flows on the named 256-bit curves.

use chain_bignum::BigInt;
use chain_curve::Curve;
use chain_ecdsa::{KeyPair, Signature};
use sha2::{Digest, Sha256};

use crate::support::FixedRng;

fn sha256(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

#[test]
fn test_secp256r1_round_trip() {
    let curve = Curve::secp256r1();
    let pair = KeyPair::generate(&curve).unwrap();
    let digest = sha256(b"transfer 100 units to account 0xAB");

    let sig = pair.sign(&digest).unwrap();
    assert!(pair.public().verify(&digest, &sig).unwrap());

    // Any change to the message breaks the signature.
    let tampered = sha256(b"transfer 900 units to account 0xAB");
    assert!(!pair.public().verify(&tampered, &sig).unwrap());

    // So does verifying under a different key.
    let other = KeyPair::generate(&curve).unwrap();
    assert!(!other.public().verify(&digest, &sig).unwrap());
}

#[test]
fn test_secp256k1_round_trip() {
    let curve = Curve::secp256k1();
    let pair = KeyPair::generate(&curve).unwrap();
    let digest = sha256(b"secp256k1 payload");
    let sig = pair.sign(&digest).unwrap();
    assert!(pair.public().verify(&digest, &sig).unwrap());
    assert!(!pair.public().verify(&sha256(b"other payload"), &sig).unwrap());
}

#[test]
fn test_secp256r1_known_answer() {
    // Fixed key, fixed digest, fixed entropy: the signature is a pinned
    // constant, guarding the whole pipeline against silent drift.
    let curve = Curve::secp256r1();
    let d = BigInt::from_hex("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721")
        .unwrap();
    let pair = KeyPair::from_private_scalar(&curve, d).unwrap();
    let digest = sha256(b"chain-sign known answer");

    let nonce_bytes: Vec<u8> = (0x11u8..=0x30).collect();
    let sig = pair
        .sign_with(&digest, &mut FixedRng::new(&nonce_bytes))
        .unwrap();

    assert_eq!(
        sig.r,
        BigInt::from_hex("c81b616fd848e1cb41459faf0fa58e78bc37f2c0bfb2b2198c446ec5734f3155")
            .unwrap()
    );
    assert_eq!(
        sig.s,
        BigInt::from_hex("6e16e73900954481630d16172f8d82879f5362c7245fb61282bbc5eba1d7e392")
            .unwrap()
    );
    assert!(pair.public().verify(&digest, &sig).unwrap());
}

#[test]
fn test_high_s_twin_verifies_but_is_never_emitted() {
    let curve = Curve::secp256r1();
    let pair = KeyPair::generate(&curve).unwrap();
    let digest = sha256(b"malleability check");
    let sig = pair.sign(&digest).unwrap();

    let half_n = &curve.n >> 1;
    assert!(sig.s <= half_n, "emitted signatures are always low-S");

    let twin = Signature {
        r: sig.r.clone(),
        s: &curve.n - &sig.s,
    };
    assert!(pair.public().verify(&digest, &twin).unwrap());
}

#[test]
fn test_low_s_holds_across_random_signatures() {
    // The canonical-form invariant must hold for every emitted
    // signature, not just a lucky draw.
    let curve = Curve::secp256r1();
    let pair = KeyPair::generate(&curve).unwrap();
    let half_n = &curve.n >> 1;
    for i in 0u8..8 {
        let mut message = b"low-s sweep".to_vec();
        message.push(i);
        let digest = sha256(&message);
        let sig = pair.sign(&digest).unwrap();
        assert!(sig.s <= half_n, "iteration {i}");
        assert!(sig.s.signum() > 0 && sig.r.signum() > 0, "iteration {i}");
        assert!(pair.public().verify(&digest, &sig).unwrap(), "iteration {i}");
    }
}

#[test]
fn test_verify_is_total_on_malformed_signatures() {
    let curve = Curve::secp256r1();
    let pair = KeyPair::generate(&curve).unwrap();
    let digest = sha256(b"boundary cases");

    for (r, s) in [
        (BigInt::zero(), BigInt::one()),
        (BigInt::one(), BigInt::zero()),
        (curve.n.clone(), BigInt::one()),
        (BigInt::one(), curve.n.clone()),
        (BigInt::from(-5i64), BigInt::one()),
    ] {
        let bad = Signature { r, s };
        assert_eq!(pair.public().verify(&digest, &bad), Ok(false));
    }

    // All-0xFF wire bytes decode to out-of-range components.
    let garbage = Signature::from_bytes(&[0xFF; 64]);
    assert_eq!(pair.public().verify(&digest, &garbage), Ok(false));
}

#[test]
fn test_signatures_bind_to_their_curve() {
    // A secp256k1 signature must not verify under a secp256r1 key built
    // from the same private scalar.
    let d = BigInt::from_hex("00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff")
        .unwrap();
    let k1_pair = KeyPair::from_private_scalar(&Curve::secp256k1(), d.clone()).unwrap();
    let r1_pair = KeyPair::from_private_scalar(&Curve::secp256r1(), d).unwrap();
    let digest = sha256(b"curve binding");
    let sig = k1_pair.sign(&digest).unwrap();
    assert!(k1_pair.public().verify(&digest, &sig).unwrap());
    assert!(!r1_pair.public().verify(&digest, &sig).unwrap());
}
