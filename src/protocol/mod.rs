//! Prover and verifier for the Fiat-Shamir discrete-logarithm proof.

use rand_core::CryptoRngCore;

use crate::{Group, Parameters, Proof, Result, Statement, Witness};

/// Prover implementation for generating proofs.
pub mod prover;
/// Verifier implementation for validating proofs.
pub mod verifier;

pub use prover::{Nonce, Prover};
pub use verifier::Verifier;

impl<G: Group> Proof<G> {
    /// Proves knowledge of `x` with `y = x * G` for session `sid` and party `pid`.
    ///
    /// `y` is trusted to match `x`; see [`Prover::with_statement`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dlog_proof::{Group, Proof, Secp256k1, SecureRng, generate_random_number};
    ///
    /// let mut rng = SecureRng::new();
    /// let x = Secp256k1::scalar_from_uint(&generate_random_number(&mut rng).unwrap());
    /// let y = Secp256k1::scalar_mul(&Secp256k1::generator(), &x);
    ///
    /// let proof = Proof::<Secp256k1>::prove(&mut rng, "sid", 1, &x, &y).unwrap();
    /// assert!(proof.verify("sid", 1, &y));
    /// ```
    pub fn prove<R: CryptoRngCore>(
        rng: &mut R,
        sid: &str,
        pid: u64,
        x: &G::Scalar,
        y: &G::Element,
    ) -> Result<Self> {
        Self::prove_with_params(rng, &Parameters::new(), sid, pid, x, y)
    }

    /// Proves knowledge of `x` with `y = x * base_point` for the base point in `params`.
    pub fn prove_with_params<R: CryptoRngCore>(
        rng: &mut R,
        params: &Parameters<G>,
        sid: &str,
        pid: u64,
        x: &G::Scalar,
        y: &G::Element,
    ) -> Result<Self> {
        Prover::with_statement(
            params.clone(),
            Witness::new(x.clone()),
            Statement::new(y.clone()),
        )
        .prove(rng, sid, pid)
    }

    /// Verifies this proof against public key `y` with base point `G`.
    pub fn verify(&self, sid: &str, pid: u64, y: &G::Element) -> bool {
        self.verify_with_params(&Parameters::new(), sid, pid, y)
    }

    /// Verifies this proof against public key `y` with the base point in `params`.
    pub fn verify_with_params(
        &self,
        params: &Parameters<G>,
        sid: &str,
        pid: u64,
        y: &G::Element,
    ) -> bool {
        Verifier::new(params.clone(), Statement::new(y.clone())).verify(self, sid, pid)
    }
}
