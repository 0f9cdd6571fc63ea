//! Signature engine error types.

use chain_bignum::BignumError;
use chain_curve::CurveError;
use thiserror::Error;

/// Errors from key handling, signing, and verification.
///
/// Malformed signatures are never an error: `verify` reports them as
/// `Ok(false)`. The variants here are precondition violations or a broken
/// entropy source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EcdsaError {
    /// A bignum failure propagated unmodified
    #[error(transparent)]
    Arithmetic(#[from] BignumError),

    /// A curve arithmetic failure propagated unmodified
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The signing retry budget was exhausted without producing a
    /// non-degenerate signature; the entropy source is suspect
    #[error("signing failed: retry budget exhausted")]
    SigningFailed,

    /// The key-generation retry budget was exhausted without drawing a
    /// scalar in `[1, n-1]`; the entropy source is suspect
    #[error("key generation failed: retry budget exhausted")]
    KeyGenerationFailed,

    /// Private scalar outside `[1, n-1]`
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// Public key encoding rejected, or a point that is not a valid
    /// public key (e.g. infinity)
    #[error("invalid public key")]
    InvalidPublicKey,
}
