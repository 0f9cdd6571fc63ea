//! # chain-ecdsa — Signature Engine
//!
//! ECDSA key generation, signing, and verification over the `chain-curve`
//! group law.
//!
//! ## Components
//!
//! | Module | Contents |
//! |--------|----------|
//! | `keys` | `PublicKey` (verify-only) and `KeyPair` (sign-capable) |
//! | `signature` | `Signature` values and their fixed-width wire form |
//! | `protocol` | Digest reduction, the signing loop, verification |
//! | `errors` | `EcdsaError` |
//!
//! ## Design
//!
//! - **Capability split**: `sign` exists only on `KeyPair`; a `PublicKey`
//!   cannot sign by construction.
//! - **Injected entropy**: `sign_with` and `generate_with` take an
//!   `RngCore + CryptoRng` capability; the `sign`/`generate` conveniences
//!   wrap the thread-local CSPRNG.
//! - **Canonical signatures**: every emitted `s` is low-S normalized, so
//!   signature bytes are unmalleable; `verify` still accepts the high twin
//!   for interoperability.
//! - **Total verification**: malformed signatures are `Ok(false)`, never an
//!   error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod keys;
mod protocol;
pub mod signature;

pub use errors::EcdsaError;
pub use keys::{KeyPair, PublicKey, PRIVATE_KEY_LEN};
pub use signature::{Signature, SignatureBytes};
