//! Bignum error types.

use thiserror::Error;

/// Errors from arbitrary-precision arithmetic.
///
/// These are precondition violations, not expected runtime conditions:
/// callers that honor the documented contracts never observe them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BignumError {
    /// Division (or reduction) by zero
    #[error("division by zero")]
    DivisionByZero,

    /// Modulus of `modulo` or `mod_inverse` must be positive
    #[error("modulus must be positive")]
    NonPositiveModulus,

    /// `mod_inverse` on a value that shares a factor with the modulus
    #[error("value has no modular inverse")]
    NotInvertible,

    /// Hex parsing encountered a character outside `[0-9a-fA-F]`
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),

    /// Fixed-width encoding of a value that is negative or too large
    #[error("value does not fit in {0} bytes")]
    ValueOutOfRange(usize),
}
