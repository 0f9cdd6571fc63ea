//! # chain-curve — Short-Weierstrass Point Arithmetic
//!
//! Affine elliptic-curve group operations over the `chain-bignum` integers.
//!
//! ## Components
//!
//! | Module | Contents |
//! |--------|----------|
//! | `curve` | Immutable `Curve` descriptors and named domain parameters |
//! | `point` | `CurvePoint` group law: double, add, scalar multiplication |
//! | `errors` | `CurveError` |
//!
//! ## Design
//!
//! - Points hold an `Arc<Curve>`: the curve is process-wide shared immutable
//!   context, not an owning back-pointer.
//! - Affine construction validates the curve equation, so a `CurvePoint`
//!   that exists is on its curve (infinity excepted).
//! - Domain parameters are trusted input; primality of `n` and the order of
//!   the generator are setup-time responsibilities of the host.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod curve;
pub mod errors;
pub mod point;

pub use curve::Curve;
pub use errors::CurveError;
pub use point::CurvePoint;
