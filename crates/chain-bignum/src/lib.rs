//! # chain-bignum — Arbitrary-Precision Integers
//!
//! Sign-magnitude big integers backing the elliptic-curve layers of the
//! chain-sign engine.
//!
//! ## Components
//!
//! | Module | Contents |
//! |--------|----------|
//! | `bigint` | The immutable `BigInt` value type and its operations |
//! | `errors` | `BignumError` precondition-violation taxonomy |
//!
//! ## Design
//!
//! - **Immutable values**: every operation returns a new `BigInt`, so values
//!   are safe to share across concurrent sign/verify calls without locking.
//! - **Euclidean reduction**: `modulo` always returns a non-negative
//!   representative, which field arithmetic depends on.
//! - **Injected entropy**: `BigInt::random` takes an `RngCore + CryptoRng`
//!   source supplied by the caller, never an ambient global.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bigint;
pub mod errors;
mod magnitude;

pub use bigint::BigInt;
pub use errors::BignumError;
