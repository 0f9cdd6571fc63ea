//! Curve arithmetic error types.

use chain_bignum::BignumError;
use thiserror::Error;

/// Errors from curve and point operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CurveError {
    /// A bignum precondition violation surfaced during coordinate
    /// arithmetic; propagated unmodified.
    #[error(transparent)]
    Arithmetic(#[from] BignumError),

    /// Affine coordinates that do not satisfy the curve equation
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// Scalar multiplication is defined for non-negative scalars only
    #[error("scalar must be non-negative")]
    NegativeScalar,
}
