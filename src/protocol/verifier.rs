use num_bigint::BigUint;
use tracing::debug;

use crate::{Group, Parameters, Proof, Statement, hash_points};

/// Verifier for the discrete-logarithm proof of knowledge.
///
/// Checks `s * base_point == t + c * y` where `c` is recomputed from the session id,
/// party id, base point, public key and commitment.
pub struct Verifier<G: Group> {
    params: Parameters<G>,
    statement: Statement<G>,
}

impl<G: Group> Verifier<G> {
    /// Creates a new verifier with the given parameters and statement.
    pub fn new(params: Parameters<G>, statement: Statement<G>) -> Self {
        Self { params, statement }
    }

    /// Verifies a non-interactive proof for session `sid` and party `pid`.
    ///
    /// Returns `false` if the proof is rejected; a rejection is not an error.
    pub fn verify(&self, proof: &Proof<G>, sid: &str, pid: u64) -> bool {
        let points = [
            self.params.base_point().clone(),
            self.statement.y().clone(),
            proof.t().clone(),
        ];
        let c = hash_points::<G>(sid, pid, &points);

        let accepted = self.verify_response(&c, proof);
        debug!(
            group = G::name(),
            sid,
            pid,
            accepted,
            "verified discrete-log proof"
        );
        accepted
    }

    /// Checks the Schnorr equation `s * base_point == t + c * y` for a given challenge.
    pub fn verify_response(&self, challenge: &BigUint, proof: &Proof<G>) -> bool {
        let c = G::scalar_from_uint(challenge);

        let lhs = G::scalar_mul(self.params.base_point(), proof.s());
        let y_c = G::scalar_mul(self.statement.y(), &c);
        let rhs = G::element_add(proof.t(), &y_c);

        lhs == rhs
    }
}
