//! Signature values and their wire encoding.

use chain_bignum::BigInt;
use serde::{Deserialize, Serialize};

use crate::errors::EcdsaError;

/// An ECDSA signature: the scalar pair `(r, s)`.
///
/// A signature produced by `sign` always has both components in
/// `[1, n-1]` with `s` in canonical low-S form; a value parsed from bytes
/// carries whatever the bytes said, and `verify` range-checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// The `r` component: `x(k*G) mod n`.
    pub r: BigInt,
    /// The `s` component: `k^-1 * (e + d*r) mod n`, low-S normalized.
    pub s: BigInt,
}

impl Signature {
    /// Encodes as 64 bytes: `r || s`, each 32 bytes big-endian.
    pub fn to_bytes(&self) -> Result<[u8; 64], EcdsaError> {
        let wire = SignatureBytes::try_from(self)?;
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&wire.r);
        out[32..].copy_from_slice(&wire.s);
        Ok(out)
    }

    /// Decodes a 64-byte `r || s` pair.
    ///
    /// Both halves are read as unsigned big-endian, so the encoding
    /// round-trips without sign ambiguity. No range validation happens
    /// here; `verify` rejects out-of-range components.
    pub fn from_bytes(bytes: &[u8; 64]) -> Signature {
        Signature {
            r: BigInt::from_bytes_be(&bytes[..32], false),
            s: BigInt::from_bytes_be(&bytes[32..], false),
        }
    }
}

/// Fixed-width wire form of a signature, for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBytes {
    /// R component (32 bytes, big-endian)
    pub r: [u8; 32],
    /// S component (32 bytes, big-endian)
    pub s: [u8; 32],
}

impl TryFrom<&Signature> for SignatureBytes {
    type Error = EcdsaError;

    fn try_from(sig: &Signature) -> Result<Self, EcdsaError> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig.r.to_bytes_be(32)?);
        s.copy_from_slice(&sig.s.to_bytes_be(32)?);
        Ok(SignatureBytes { r, s })
    }
}

impl From<&SignatureBytes> for Signature {
    fn from(wire: &SignatureBytes) -> Signature {
        Signature {
            r: BigInt::from_bytes_be(&wire.r, false),
            s: BigInt::from_bytes_be(&wire.s, false),
        }
    }
}
