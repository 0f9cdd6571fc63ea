//! The full key → sign → verify lifecycle on a group small enough to
//! audit by hand.
//!
//! On `y^2 = x^3 + 3x + 5` over `F_17` (order 23), every intermediate
//! value fits in a nibble, so these tests double as a worked example of
//! the protocol.

use chain_bignum::BigInt;
use chain_ecdsa::{KeyPair, Signature};

use crate::support::{toy_curve, FixedRng};

/// 32 zero bytes ending in 0x07: the key-generation draw reads them as
/// the scalar 7, which is inside [1, 22] and accepted on the first try.
const SECRET_SEVEN: [u8; 32] = {
    let mut bytes = [0u8; 32];
    bytes[31] = 0x07;
    bytes
};

#[test]
fn test_generation_accepts_first_in_range_scalar() {
    let curve = toy_curve();
    let generated = KeyPair::generate_with(&curve, &mut FixedRng::new(&SECRET_SEVEN)).unwrap();
    let imported = KeyPair::from_private_scalar(&curve, BigInt::from(7u64)).unwrap();
    assert_eq!(generated.public(), imported.public());
    // 7G = (15, 12)
    let (x, y) = generated.public().point().affine().unwrap();
    assert_eq!(*x, BigInt::from(15u64));
    assert_eq!(*y, BigInt::from(12u64));
}

#[test]
fn test_generation_skips_out_of_range_draws() {
    // First 32-byte draw reads as a huge scalar and is rejected; the
    // second draw lands on 7.
    let curve = toy_curve();
    let mut bytes = [0xEEu8; 64];
    bytes[32..].copy_from_slice(&SECRET_SEVEN);
    let generated = KeyPair::generate_with(&curve, &mut FixedRng::new(&bytes)).unwrap();
    let imported = KeyPair::from_private_scalar(&curve, BigInt::from(7u64)).unwrap();
    assert_eq!(generated.public(), imported.public());
}

#[test]
fn test_full_lifecycle_with_pinned_nonce() {
    let curve = toy_curve();
    let pair = KeyPair::from_private_scalar(&curve, BigInt::from(7u64)).unwrap();
    let digest = [0x01u8, 0x02];

    // Entropy byte 0x00 pins the nonce to k = 16: e = 0 (the 16-bit
    // digest's top 5 bits), 16G = (15, 5), r = 15, and
    // s = 16^-1 * (0 + 7 * 15) = 8 mod 23, already in low-S form.
    let sig = pair
        .sign_with(&digest, &mut FixedRng::new(&[0x00]))
        .unwrap();
    assert_eq!(sig.r, BigInt::from(15u64));
    assert_eq!(sig.s, BigInt::from(8u64));

    assert!(pair.public().verify(&digest, &sig).unwrap());
    // A different digest reduces to a different e.
    assert!(!pair.public().verify(&[0xFFu8, 0x00], &sig).unwrap());
}

#[test]
fn test_signature_survives_wire_transport() {
    let curve = toy_curve();
    let pair = KeyPair::from_private_scalar(&curve, BigInt::from(7u64)).unwrap();
    let digest = [0x01u8, 0x02];
    let sig = pair
        .sign_with(&digest, &mut FixedRng::new(&[0x00]))
        .unwrap();

    let bytes = sig.to_bytes().unwrap();
    let restored = Signature::from_bytes(&bytes);
    assert_eq!(restored, sig);
    assert!(pair.public().verify(&digest, &restored).unwrap());
}

#[test]
fn test_verifier_rejects_other_keys_signature() {
    let curve = toy_curve();
    let signer = KeyPair::from_private_scalar(&curve, BigInt::from(7u64)).unwrap();
    let other = KeyPair::from_private_scalar(&curve, BigInt::from(11u64)).unwrap();
    let digest = [0x01u8, 0x02];
    let sig = signer
        .sign_with(&digest, &mut FixedRng::new(&[0x00]))
        .unwrap();
    assert!(!other.public().verify(&digest, &sig).unwrap());
}
