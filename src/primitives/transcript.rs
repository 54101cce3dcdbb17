//! Fiat-Shamir transcript for non-interactive proofs.
//!
//! The challenge is SHA-256 over, in order: the session id, the party id, then each
//! point of the statement. Every item is framed by its length as an 8-byte big-endian
//! integer so that no two distinct inputs produce the same byte stream. The digest is
//! read as a big-endian unsigned integer and is deliberately not reduced modulo `q`.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use super::fields::{BigIntegerField, ByteField, PointField, StringField};
use crate::Group;

/// Transcript wrapper for Fiat-Shamir transformation.
#[derive(Clone, Default)]
pub struct Transcript(Sha256);

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    /// Appends the session id (UTF-8).
    pub fn append_sid(&mut self, sid: &str) {
        self.append_message(&StringField.str_to_bytes(sid));
    }

    /// Appends the party id (minimal big-endian).
    pub fn append_pid(&mut self, pid: u64) {
        self.append_message(&BigIntegerField.to_bytes(&BigUint::from(pid)));
    }

    /// Appends a curve point (compressed SEC1).
    pub fn append_point<G: Group>(&mut self, point: &G::Element) {
        self.append_message(&PointField::<G>::new().to_bytes(point));
    }

    /// Consumes the transcript and returns the digest as an unsigned integer.
    pub fn challenge(self) -> BigUint {
        BigIntegerField
            .from_bytes(&self.0.finalize())
            .unwrap_or_else(|_| unreachable!("any byte string is a valid big-endian integer"))
    }

    fn append_message(&mut self, message: &[u8]) {
        self.0.update((message.len() as u64).to_be_bytes());
        self.0.update(message);
    }
}

/// Derives the Fiat-Shamir challenge for `points` bound to session `sid` and party `pid`.
///
/// Deterministic; the order of `points` is part of the input.
pub fn hash_points<G: Group>(sid: &str, pid: u64, points: &[G::Element]) -> BigUint {
    let mut transcript = Transcript::new();
    transcript.append_sid(sid);
    transcript.append_pid(pid);
    for point in points {
        transcript.append_point::<G>(point);
    }
    transcript.challenge()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Secp256k1;

    fn points() -> [<Secp256k1 as Group>::Element; 3] {
        let g = Secp256k1::generator();
        let two = Secp256k1::scalar_from_uint(&BigUint::from(2u32));
        let three = Secp256k1::scalar_from_uint(&BigUint::from(3u32));
        [
            g.clone(),
            Secp256k1::scalar_mul(&g, &two),
            Secp256k1::scalar_mul(&g, &three),
        ]
    }

    #[test]
    fn challenge_is_deterministic() {
        let [p1, p2, p3] = points();
        let c1 = hash_points::<Secp256k1>("sid", 1, &[p1.clone(), p2.clone(), p3.clone()]);
        let c2 = hash_points::<Secp256k1>("sid", 1, &[p1, p2, p3]);
        assert_eq!(c1, c2);
    }

    #[test]
    fn challenge_depends_on_point_order() {
        let [p1, p2, p3] = points();
        let c1 = hash_points::<Secp256k1>("sid", 1, &[p1.clone(), p2.clone(), p3.clone()]);
        let c2 = hash_points::<Secp256k1>("sid", 1, &[p2, p1, p3]);
        assert_ne!(c1, c2);
    }

    #[test]
    fn challenge_depends_on_session_and_party() {
        let pts = points();
        let base = hash_points::<Secp256k1>("sid", 1, &pts);
        assert_ne!(base, hash_points::<Secp256k1>("sid2", 1, &pts));
        assert_ne!(base, hash_points::<Secp256k1>("sid", 2, &pts));
    }

    #[test]
    fn framing_separates_sid_from_pid() {
        // Unframed, "a" || 0x6201 and "ab" || 0x01 would be the same byte stream.
        let pts = points();
        let c1 = hash_points::<Secp256k1>("a", 0x6201, &pts);
        let c2 = hash_points::<Secp256k1>("ab", 0x01, &pts);
        assert_ne!(c1, c2);
    }

    #[test]
    fn challenge_matches_manual_sha256() {
        let g = Secp256k1::generator();
        let mut hasher = Sha256::new();
        hasher.update(3u64.to_be_bytes());
        hasher.update(b"sid");
        hasher.update(1u64.to_be_bytes());
        hasher.update([1u8]);
        hasher.update(33u64.to_be_bytes());
        hasher.update(Secp256k1::element_to_bytes(&g));
        let expected = BigUint::from_bytes_be(&hasher.finalize());

        assert_eq!(hash_points::<Secp256k1>("sid", 1, &[g]), expected);
    }

    #[test]
    fn length_prefix_is_eight_bytes() {
        let mut framed = Transcript::new();
        framed.append_sid("sid");

        let mut hasher = Sha256::new();
        hasher.update([0u8, 0, 0, 0, 0, 0, 0, 3]);
        hasher.update(b"sid");
        let expected = BigUint::from_bytes_be(&hasher.finalize());

        assert_eq!(framed.challenge(), expected);
    }
}
