//! Non-interactive zero-knowledge proof of knowledge of a discrete logarithm.
//!
//! Schnorr's identification protocol made non-interactive with the Fiat-Shamir
//! transform, over a prime-order elliptic-curve group. A prover who knows `x` with
//! `y = x * G` produces a proof `(t, s)` that convinces anyone holding `y` without
//! revealing `x`. Each proof is bound to a session id and a party id.
//!
//! # Example
//!
//! ```rust
//! use dlog_proof::{Group, Proof, Secp256k1, SecureRng, generate_random_number};
//!
//! let mut rng = SecureRng::new();
//! let x = Secp256k1::scalar_from_uint(&generate_random_number(&mut rng).unwrap());
//! let y = Secp256k1::scalar_mul(&Secp256k1::generator(), &x);
//!
//! let proof = Proof::<Secp256k1>::prove(&mut rng, "sid", 1, &x, &y).unwrap();
//! let wire = proof.to_str();
//!
//! let received: Proof<Secp256k1> = wire.parse().unwrap();
//! assert!(received.verify("sid", 1, &y));
//! assert!(!received.verify("other-sid", 1, &y));
//! ```

#![forbid(unsafe_code)]

/// Error types.
pub mod error;
/// Core cryptographic primitives.
pub mod primitives;
/// Prover and verifier.
pub mod protocol;

pub use error::{Error, Result};
pub use primitives::{
    BigIntegerField, ByteField, Group, P256, Parameters, PointField, Proof, ProofField,
    ProofRecord, RANDOM_NUMBER_BYTES, Secp256k1, SecureRng, SerializerField, Statement,
    StringField, Transcript, Witness, generate_random_number, hash_points,
};
pub use protocol::{Nonce, Prover, Verifier};
