use rand_core::CryptoRngCore;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    Group, Parameters, Proof, Result, Statement, Witness, generate_random_number, hash_points,
};

/// Prover for the discrete-logarithm proof of knowledge.
///
/// Generates non-interactive proofs demonstrating knowledge of `x` such that
/// `y = x * base_point` without revealing `x`.
///
/// # Security
///
/// - Always use [`SecureRng`](crate::SecureRng) for randomness generation
/// - Bind every proof to its session and party ids
/// - Ensure the witness is zeroized after use (automatic with [`Witness`])
pub struct Prover<G: Group> {
    params: Parameters<G>,
    witness: Witness<G>,
    statement: Statement<G>,
}

impl<G: Group> Prover<G> {
    /// Creates a new prover with the given parameters and witness.
    ///
    /// The statement is computed from the witness as `y = x * base_point`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dlog_proof::{Parameters, Prover, Secp256k1, SecureRng, Witness, generate_random_number};
    ///
    /// let mut rng = SecureRng::new();
    /// let x = generate_random_number(&mut rng).unwrap();
    /// let prover = Prover::new(Parameters::<Secp256k1>::new(), Witness::from_uint(&x));
    /// let proof = prover.prove(&mut rng, "sid", 1).unwrap();
    /// ```
    pub fn new(params: Parameters<G>, witness: Witness<G>) -> Self {
        let statement = Statement::from_witness(&params, &witness);
        Self {
            params,
            witness,
            statement,
        }
    }

    /// Creates a prover from an existing statement and witness.
    ///
    /// # Security
    ///
    /// The caller must ensure `y == x * base_point`. This is not checked: a proof for an
    /// inconsistent pair is produced normally and simply fails to verify.
    pub fn with_statement(
        params: Parameters<G>,
        witness: Witness<G>,
        statement: Statement<G>,
    ) -> Self {
        Self {
            params,
            witness,
            statement,
        }
    }

    /// Returns the public statement.
    pub fn statement(&self) -> &Statement<G> {
        &self.statement
    }

    /// Generates a non-interactive proof bound to session `sid` and party `pid`.
    ///
    /// Draws one fresh nonce `r`, commits `t = r * base_point`, derives
    /// `c = hash_points(sid, pid, [base_point, y, t])` and responds `s = r + c * x mod q`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`](crate::Error::Entropy) if `rng` cannot produce bytes.
    pub fn prove<R: CryptoRngCore>(&self, rng: &mut R, sid: &str, pid: u64) -> Result<Proof<G>> {
        let nonce = Nonce::<G>::generate(rng)?;
        let t = G::scalar_mul(self.params.base_point(), nonce.r());

        let c = hash_points::<G>(
            sid,
            pid,
            &[
                self.params.base_point().clone(),
                self.statement.y().clone(),
                t.clone(),
            ],
        );
        let c = G::scalar_from_uint(&c);

        let cx = G::scalar_mul_scalar(&c, self.witness.secret());
        let s = G::scalar_add(nonce.r(), &cx);

        debug!(group = G::name(), sid, pid, "generated discrete-log proof");
        Ok(Proof::new(t, s))
    }
}

/// Secret nonce used in the commitment.
///
/// Automatically zeroized when dropped.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Nonce<G: Group> {
    r: G::Scalar,
}

impl<G: Group> Nonce<G> {
    /// Draws a fresh nonce from 32 random bytes, reduced modulo `q`.
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Result<Self> {
        let r = generate_random_number(rng)?;
        Ok(Self {
            r: G::scalar_from_uint(&r),
        })
    }

    /// Returns a reference to the nonce scalar.
    pub fn r(&self) -> &G::Scalar {
        &self.r
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::{Secp256k1, SecureRng};

    #[test]
    fn prover_computes_statement() {
        let params = Parameters::<Secp256k1>::new();
        let prover = Prover::new(params, Witness::from_uint(&BigUint::from(5u32)));

        let five = Secp256k1::scalar_from_uint(&BigUint::from(5u32));
        let expected = Secp256k1::scalar_mul(&Secp256k1::generator(), &five);
        assert_eq!(prover.statement().y(), &expected);
    }

    #[test]
    fn prove_satisfies_schnorr_equation() {
        let mut rng = SecureRng::new();
        let params = Parameters::<Secp256k1>::new();
        let prover = Prover::new(params, Witness::from_uint(&BigUint::from(5u32)));
        let proof = prover.prove(&mut rng, "sid", 1).unwrap();

        let g = Secp256k1::generator();
        let y = prover.statement().y().clone();
        let c = hash_points::<Secp256k1>("sid", 1, &[g.clone(), y.clone(), proof.t().clone()]);
        let c = Secp256k1::scalar_from_uint(&c);

        let lhs = Secp256k1::scalar_mul(&g, proof.s());
        let rhs = Secp256k1::element_add(proof.t(), &Secp256k1::scalar_mul(&y, &c));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn inconsistent_statement_still_produces_proof() {
        let mut rng = SecureRng::new();
        let params = Parameters::<Secp256k1>::new();
        let statement = Statement::new(Secp256k1::generator());
        let prover = Prover::with_statement(
            params,
            Witness::from_uint(&BigUint::from(7u32)),
            statement,
        );
        assert!(prover.prove(&mut rng, "sid", 1).is_ok());
    }

    #[test]
    fn nonces_are_fresh() {
        let mut rng = SecureRng::new();
        let a = Nonce::<Secp256k1>::generate(&mut rng).unwrap();
        let b = Nonce::<Secp256k1>::generate(&mut rng).unwrap();
        assert_ne!(a.r(), b.r());
    }
}
