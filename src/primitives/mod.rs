//! Core cryptographic primitives for the discrete-logarithm proof.
//!
//! This module contains all fundamental mathematical and cryptographic building blocks:
//! - **crypto**: Group trait and secure randomness
//! - **groups**: Concrete group implementations (secp256k1, P-256)
//! - **fields**: Canonical byte and wire encoders for integers, points and strings
//! - **gadgets**: Protocol parameters, statements, witnesses, and proofs
//! - **transcript**: Fiat-Shamir challenge derivation

/// Cryptographic primitives and traits.
pub mod crypto;
/// Canonical encoders for hashing and wire formats.
pub mod fields;
/// Protocol gadgets (parameters, statements, witnesses, proofs).
pub mod gadgets;
/// Group implementations.
pub mod groups;
/// Transcript for Fiat-Shamir transform.
pub mod transcript;

pub use crypto::{Group, RANDOM_NUMBER_BYTES, SecureRng, generate_random_number};
pub use fields::{BigIntegerField, ByteField, PointField, SerializerField, StringField};
pub use gadgets::{Parameters, Proof, ProofField, ProofRecord, Statement, Witness};
pub use groups::{P256, Secp256k1};
pub use transcript::{Transcript, hash_points};
