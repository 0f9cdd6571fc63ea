//! The ECDSA protocol: digest reduction, signing, verification.
//!
//! Stateless throughout: every operation is a pure function of its curve,
//! key, digest, and signature inputs, so concurrent invocations need no
//! synchronization (the entropy capability's thread safety is the
//! caller's contract).

use chain_bignum::BigInt;
use chain_curve::CurvePoint;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::errors::EcdsaError;
use crate::keys::{KeyPair, PublicKey};
use crate::signature::Signature;

/// Retry budget for the signing loop. Each iteration fails only with
/// negligible probability, so exhaustion indicates a broken entropy
/// source; failing loudly beats looping forever or emitting a weak
/// signature.
const MAX_SIGNING_ATTEMPTS: usize = 64;

/// Reduces a message digest to the scalar `e`.
///
/// The digest bytes are read as a big-endian non-negative integer; if the
/// digest is longer than `bit_length(n)` bits, the excess low-order bits
/// are shifted away. This must match bit-for-bit across implementations
/// for cross-verification to succeed.
pub(crate) fn calculate_e(n: &BigInt, digest: &[u8]) -> BigInt {
    let digest_bits = digest.len() * 8;
    let e = BigInt::from_bytes_be(digest, false);
    if n.bit_length() < digest_bits {
        &e >> (digest_bits - n.bit_length())
    } else {
        e
    }
}

impl KeyPair {
    /// Signs a message digest using the ambient thread-local CSPRNG.
    pub fn sign(&self, digest: &[u8]) -> Result<Signature, EcdsaError> {
        self.sign_with(digest, &mut rand::thread_rng())
    }

    /// Signs a message digest, drawing nonces from an injected entropy
    /// capability.
    ///
    /// Rejection-sampling loop: a fresh nonce `k` is drawn per attempt
    /// and rejected outside `[1, n-1]`; attempts producing `r = 0` or
    /// `s = 0` restart. `s` is always normalized to its low-S
    /// representative (`s <= n/2`), so no two distinct byte-valid
    /// signatures exist for the same message and nonce — malleable twins
    /// are never emitted.
    pub fn sign_with<R: RngCore + CryptoRng>(
        &self,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Signature, EcdsaError> {
        let curve = self.public().curve();
        let n = &curve.n;
        let e = calculate_e(n, digest);
        let half_n = n >> 1;
        let g = CurvePoint::generator(curve);
        for attempt in 0..MAX_SIGNING_ATTEMPTS {
            let mut k = BigInt::random(n.bit_length(), rng);
            if k.is_zero() || k >= *n {
                trace!(attempt, "nonce outside [1, n-1], redrawing");
                continue;
            }
            let point = g.multiply(&k)?;
            let Some((x, _)) = point.affine() else {
                // Unreachable for 0 < k < n; tolerate a hostile curve.
                debug!(attempt, "nonce multiple reduced to infinity, restarting");
                continue;
            };
            let r = x.modulo(n)?;
            if r.is_zero() {
                debug!(attempt, "r reduced to zero, restarting");
                continue;
            }
            let mut k_inv = k.mod_inverse(n)?;
            let mut s = (&k_inv * &(&e + &(self.secret() * &r))).modulo(n)?;
            k.zeroize();
            k_inv.zeroize();
            if s > half_n {
                s = n - &s;
            }
            if s.is_zero() {
                debug!(attempt, "s reduced to zero, restarting");
                continue;
            }
            return Ok(Signature { r, s });
        }
        Err(EcdsaError::SigningFailed)
    }
}

impl PublicKey {
    /// Verifies a signature over a message digest.
    ///
    /// A total predicate on adversarial input: out-of-range `r`/`s` and
    /// degenerate results yield `Ok(false)`, never an error. The `Err`
    /// channel carries only arithmetic failures that cannot occur with
    /// valid curve parameters.
    pub fn verify(&self, digest: &[u8], signature: &Signature) -> Result<bool, EcdsaError> {
        let curve = self.curve();
        let n = &curve.n;
        if signature.r.signum() < 1
            || signature.s.signum() < 1
            || signature.r >= *n
            || signature.s >= *n
        {
            return Ok(false);
        }
        let e = calculate_e(n, digest);
        let c = signature.s.mod_inverse(n)?;
        let u1 = (&e * &c).modulo(n)?;
        let u2 = (&signature.r * &c).modulo(n)?;
        let g = CurvePoint::generator(curve);
        let v = CurvePoint::sum_of_two_multiplies(&g, &u1, self.point(), &u2)?;
        match v.affine() {
            // Infinity has no x-coordinate to compare.
            None => Ok(false),
            Some((x, _)) => Ok(x.modulo(n)? == signature.r),
        }
    }
}
