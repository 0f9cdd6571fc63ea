//! Fuzz target for ECDSA signature verification.
//!
//! Exercises `PublicKey::verify` with adversarial signature and digest
//! bytes. Verification must never panic and must be deterministic.
//!
//! ## Running
//!
//! ```bash
//! cd crates/chain-ecdsa
//! cargo +nightly fuzz run fuzz_verify
//! ```

#![no_main]

use chain_curve::Curve;
use chain_ecdsa::{KeyPair, PublicKey, Signature};
use libfuzzer_sys::fuzz_target;

/// Fuzz input structure for verification.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Message digest to verify against
    digest: [u8; 32],
    /// Raw `r || s` signature bytes
    signature: [u8; 64],
    /// Candidate private key bytes for deriving the public key
    private_key: [u8; 32],
}

fuzz_target!(|input: FuzzInput| {
    let curve = Curve::secp256r1();

    // Most 32-byte strings are valid scalars; fall back to a fixed key
    // when the fuzzer hands us one that is not.
    let public: PublicKey = match KeyPair::from_private_bytes(&curve, &input.private_key) {
        Ok(pair) => pair.public().clone(),
        Err(_) => {
            let mut bytes = [0u8; 32];
            bytes[31] = 1;
            match KeyPair::from_private_bytes(&curve, &bytes) {
                Ok(pair) => pair.public().clone(),
                Err(_) => return,
            }
        }
    };

    let signature = Signature::from_bytes(&input.signature);

    // Must never panic, regardless of input.
    let result = public.verify(&input.digest, &signature);

    // Verification is deterministic.
    let result2 = public.verify(&input.digest, &signature);
    assert_eq!(result, result2);

    // With valid curve parameters the arithmetic error channel is
    // unreachable from verify.
    assert!(result.is_ok());
});
