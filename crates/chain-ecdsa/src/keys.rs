//! Key material: verify-only public keys and sign-capable key pairs.
//!
//! The capability split is structural: `sign` exists only on `KeyPair`, so
//! "signing without a private key" is unrepresentable rather than a runtime
//! check. Constructing the public half of a pair shares no private state.

use std::fmt;
use std::sync::Arc;

use chain_bignum::BigInt;
use chain_curve::{Curve, CurvePoint};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroize;

use crate::errors::EcdsaError;

/// Private scalar encoding width in bytes for the curves in scope.
pub const PRIVATE_KEY_LEN: usize = 32;

/// SEC1 uncompressed point prefix.
const UNCOMPRESSED_PREFIX: u8 = 0x04;

/// Retry budget for drawing a private scalar in `[1, n-1]`. Rejection is
/// astronomically rare for 256-bit orders; hitting the budget means the
/// entropy source is broken.
const MAX_GENERATION_ATTEMPTS: usize = 64;

/// A verify-only public key: a non-infinity point on its curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Wraps a curve point as a public key, rejecting infinity (which has
    /// no affine coordinates and cannot authenticate anything).
    pub fn from_point(point: CurvePoint) -> Result<PublicKey, EcdsaError> {
        if point.is_infinity() {
            return Err(EcdsaError::InvalidPublicKey);
        }
        Ok(PublicKey { point })
    }

    /// Decodes a SEC1 uncompressed encoding: `0x04 || x || y`, 65 bytes.
    ///
    /// The point is validated to lie on `curve`.
    pub fn from_uncompressed_bytes(
        curve: &Arc<Curve>,
        bytes: &[u8],
    ) -> Result<PublicKey, EcdsaError> {
        if bytes.len() != 1 + 2 * PRIVATE_KEY_LEN || bytes[0] != UNCOMPRESSED_PREFIX {
            return Err(EcdsaError::InvalidPublicKey);
        }
        let x = BigInt::from_bytes_be(&bytes[1..33], false);
        let y = BigInt::from_bytes_be(&bytes[33..], false);
        let point = CurvePoint::new(curve, x, y).map_err(|_| EcdsaError::InvalidPublicKey)?;
        PublicKey::from_point(point)
    }

    /// Encodes as SEC1 uncompressed: `0x04 || x || y`, 65 bytes.
    pub fn to_uncompressed_bytes(&self) -> Result<[u8; 65], EcdsaError> {
        let Some((x, y)) = self.point.affine() else {
            return Err(EcdsaError::InvalidPublicKey);
        };
        let mut out = [0u8; 65];
        out[0] = UNCOMPRESSED_PREFIX;
        out[1..33].copy_from_slice(&x.to_bytes_be(32)?);
        out[33..].copy_from_slice(&y.to_bytes_be(32)?);
        Ok(out)
    }

    /// The underlying curve point.
    pub fn point(&self) -> &CurvePoint {
        &self.point
    }

    /// The curve this key lives on.
    pub fn curve(&self) -> &Arc<Curve> {
        self.point.curve()
    }
}

/// A sign-capable key pair: the public key plus the private scalar `d`
/// with `publicKey = d * G`.
///
/// The private scalar is zeroized when the pair is dropped.
#[derive(Clone)]
pub struct KeyPair {
    public: PublicKey,
    secret: BigInt,
}

impl KeyPair {
    /// Generates a key pair from the ambient thread-local CSPRNG.
    pub fn generate(curve: &Arc<Curve>) -> Result<KeyPair, EcdsaError> {
        KeyPair::generate_with(curve, &mut rand::thread_rng())
    }

    /// Generates a key pair from an injected entropy capability.
    ///
    /// Draws 32 uniformly random bytes as the scalar candidate and
    /// rejection-samples into `[1, n-1]`, so the scalar distribution is
    /// unbiased even for orders that are not exactly 256 bits.
    pub fn generate_with<R: RngCore + CryptoRng>(
        curve: &Arc<Curve>,
        rng: &mut R,
    ) -> Result<KeyPair, EcdsaError> {
        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let mut buf = [0u8; PRIVATE_KEY_LEN];
            rng.fill_bytes(&mut buf);
            let d = BigInt::from_bytes_be(&buf, false);
            buf.zeroize();
            if d.is_zero() || d >= curve.n {
                debug!(attempt, "scalar candidate outside [1, n-1], redrawing");
                continue;
            }
            return KeyPair::from_private_scalar(curve, d);
        }
        Err(EcdsaError::KeyGenerationFailed)
    }

    /// Imports a private key from its 32-byte big-endian encoding.
    pub fn from_private_bytes(
        curve: &Arc<Curve>,
        bytes: &[u8; PRIVATE_KEY_LEN],
    ) -> Result<KeyPair, EcdsaError> {
        let d = BigInt::from_bytes_be(bytes, false);
        KeyPair::from_private_scalar(curve, d)
    }

    /// Builds a key pair from a private scalar, deriving `Q = d * G`.
    ///
    /// Fails with `InvalidPrivateKey` unless `d` is in `[1, n-1]`.
    pub fn from_private_scalar(curve: &Arc<Curve>, d: BigInt) -> Result<KeyPair, EcdsaError> {
        if d.signum() <= 0 || d >= curve.n {
            return Err(EcdsaError::InvalidPrivateKey);
        }
        let q = CurvePoint::generator(curve).multiply(&d)?;
        Ok(KeyPair {
            public: PublicKey::from_point(q)?,
            secret: d,
        })
    }

    /// The verify-only half of this pair. Cloning it shares nothing with
    /// the private scalar.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Exports the private scalar as 32 big-endian bytes.
    pub fn to_private_bytes(&self) -> Result<[u8; PRIVATE_KEY_LEN], EcdsaError> {
        let mut out = [0u8; PRIVATE_KEY_LEN];
        out.copy_from_slice(&self.secret.to_bytes_be(PRIVATE_KEY_LEN)?);
        Ok(out)
    }

    pub(crate) fn secret(&self) -> &BigInt {
        &self.secret
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the private scalar.
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("secret", &"<redacted>")
            .finish()
    }
}
