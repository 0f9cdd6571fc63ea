//! Curve domain parameters.
//!
//! A `Curve` is an immutable descriptor constructed once (at process start,
//! typically) and shared by every point and key that references it. The
//! parameters are trusted input: validating that `n` is prime and that the
//! generator has order exactly `n` is a setup-time responsibility outside
//! this crate.

use std::sync::Arc;

use chain_bignum::BigInt;

/// secp256r1 field prime `p`.
const P256_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// secp256r1 coefficient `a` (`p - 3`).
const P256_A: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
];

/// secp256r1 coefficient `b`.
const P256_B: [u8; 32] = [
    0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7, 0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86, 0xBC,
    0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6, 0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2, 0x60, 0x4B,
];

/// secp256r1 generator x-coordinate.
const P256_GX: [u8; 32] = [
    0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47, 0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40, 0xF2,
    0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0, 0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98, 0xC2, 0x96,
];

/// secp256r1 generator y-coordinate.
const P256_GY: [u8; 32] = [
    0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B, 0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E, 0x16,
    0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE, 0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF, 0x51, 0xF5,
];

/// secp256r1 group order `n`.
const P256_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63, 0x25, 0x51,
];

/// secp256k1 field prime `p`.
const K256_P: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// secp256k1 generator x-coordinate.
const K256_GX: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
    0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
];

/// secp256k1 generator y-coordinate.
const K256_GY: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
    0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0xB8,
];

/// secp256k1 group order `n`.
const K256_N: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Immutable short-Weierstrass curve descriptor over a prime field:
/// `y^2 = x^3 + a*x + b (mod p)`, generator `(gx, gy)` of prime order `n`
/// (cofactor 1 for the curves in scope).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    /// Field prime.
    pub p: BigInt,
    /// Curve coefficient `a`.
    pub a: BigInt,
    /// Curve coefficient `b`.
    pub b: BigInt,
    /// Generator x-coordinate.
    pub gx: BigInt,
    /// Generator y-coordinate.
    pub gy: BigInt,
    /// Prime order of the subgroup generated by the base point.
    pub n: BigInt,
}

impl Curve {
    /// Builds a curve from caller-supplied domain parameters.
    ///
    /// The parameters are treated as trusted, validated input.
    pub fn new(p: BigInt, a: BigInt, b: BigInt, gx: BigInt, gy: BigInt, n: BigInt) -> Arc<Curve> {
        Arc::new(Curve { p, a, b, gx, gy, n })
    }

    /// The NIST P-256 curve (secp256r1), the ledger's signing curve.
    pub fn secp256r1() -> Arc<Curve> {
        Curve::new(
            BigInt::from_bytes_be(&P256_P, false),
            BigInt::from_bytes_be(&P256_A, false),
            BigInt::from_bytes_be(&P256_B, false),
            BigInt::from_bytes_be(&P256_GX, false),
            BigInt::from_bytes_be(&P256_GY, false),
            BigInt::from_bytes_be(&P256_N, false),
        )
    }

    /// The secp256k1 curve.
    pub fn secp256k1() -> Arc<Curve> {
        Curve::new(
            BigInt::from_bytes_be(&K256_P, false),
            BigInt::zero(),
            BigInt::from(7u64),
            BigInt::from_bytes_be(&K256_GX, false),
            BigInt::from_bytes_be(&K256_GY, false),
            BigInt::from_bytes_be(&K256_N, false),
        )
    }
}
