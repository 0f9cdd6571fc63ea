//! Wire formats for keys and signatures.

use chain_bignum::BigInt;
use chain_curve::Curve;
use chain_ecdsa::{KeyPair, PublicKey, Signature, SignatureBytes};

#[test]
fn test_public_key_of_scalar_one_encodes_the_generator() {
    let curve = Curve::secp256r1();
    let pair = KeyPair::from_private_scalar(&curve, BigInt::one()).unwrap();
    let bytes = pair.public().to_uncompressed_bytes().unwrap();

    assert_eq!(bytes[0], 0x04);
    assert_eq!(
        hex::encode(&bytes[1..33]),
        "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
    );
    assert_eq!(
        hex::encode(&bytes[33..]),
        "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
    );
}

#[test]
fn test_public_key_uncompressed_roundtrip() {
    let curve = Curve::secp256k1();
    let pair = KeyPair::generate(&curve).unwrap();
    let bytes = pair.public().to_uncompressed_bytes().unwrap();
    let restored = PublicKey::from_uncompressed_bytes(&curve, &bytes).unwrap();
    assert_eq!(&restored, pair.public());
}

#[test]
fn test_private_key_bytes_roundtrip() {
    let curve = Curve::secp256r1();
    let pair = KeyPair::generate(&curve).unwrap();
    let bytes = pair.to_private_bytes().unwrap();
    let restored = KeyPair::from_private_bytes(&curve, &bytes).unwrap();
    assert_eq!(restored.public(), pair.public());
}

#[test]
fn test_signature_wire_layout_is_fixed_width_big_endian() {
    let sig = Signature {
        r: BigInt::from(0x0102u64),
        s: BigInt::from(0x0304_0506u64),
    };
    let bytes = sig.to_bytes().unwrap();
    assert_eq!(&bytes[..30], &[0u8; 30]);
    assert_eq!(&bytes[30..32], &[0x01, 0x02]);
    assert_eq!(&bytes[32..60], &[0u8; 28]);
    assert_eq!(&bytes[60..], &[0x03, 0x04, 0x05, 0x06]);
    assert_eq!(Signature::from_bytes(&bytes), sig);
}

#[test]
fn test_signature_serde_transport() {
    let sig = Signature {
        r: BigInt::from_hex("c81b616fd848e1cb41459faf0fa58e78bc37f2c0bfb2b2198c446ec5734f3155")
            .unwrap(),
        s: BigInt::from_hex("6e16e73900954481630d16172f8d82879f5362c7245fb61282bbc5eba1d7e392")
            .unwrap(),
    };
    let wire = SignatureBytes::try_from(&sig).unwrap();
    let json = serde_json::to_string(&wire).unwrap();
    let back: SignatureBytes = serde_json::from_str(&json).unwrap();
    assert_eq!(Signature::from(&back), sig);
}
