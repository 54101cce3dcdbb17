//! Protocol gadgets for discrete-logarithm proofs.
//!
//! This module contains the core data structures used in the protocol:
//! parameters, witness, statement and proof, plus the proof's wire record.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::fields::{BigIntegerField, PointField, SerializerField};
use crate::{Error, Group, Result};

/// Public parameters for the discrete-logarithm proof.
///
/// Captures the group (its name and order come from `G`) and the base point the
/// prover and verifier must share. The base point defaults to the group generator.
#[derive(Clone, Debug)]
pub struct Parameters<G: Group> {
    base_point: G::Element,
}

impl<G: Group> Parameters<G> {
    /// Creates parameters whose base point is the group generator `G`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dlog_proof::{Parameters, Secp256k1};
    ///
    /// let params = Parameters::<Secp256k1>::new();
    /// ```
    pub fn new() -> Self {
        Self {
            base_point: G::generator(),
        }
    }

    /// Creates parameters with a substitute base point.
    ///
    /// The same parameters must be used to prove and to verify.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is the identity or fails group validation.
    pub fn with_base_point(base_point: G::Element) -> Result<Self> {
        G::validate_element(&base_point)?;

        if G::is_identity(&base_point) {
            return Err(Error::InvalidParams(
                "Base point cannot be identity".to_string(),
            ));
        }

        Ok(Self { base_point })
    }

    /// Returns the base point.
    pub fn base_point(&self) -> &G::Element {
        &self.base_point
    }

    /// Returns the name of the underlying group.
    pub fn group_name(&self) -> &'static str {
        G::name()
    }

    /// Returns the prime order `q` of the underlying group.
    pub fn order(&self) -> &'static BigUint {
        G::order()
    }
}

impl<G: Group> Default for Parameters<G> {
    fn default() -> Self {
        Self::new()
    }
}

/// Secret witness: the discrete logarithm `x` of the public key.
///
/// The witness is automatically zeroized when dropped. It is never serialized.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Witness<G: Group> {
    x: G::Scalar,
}

impl<G: Group> Witness<G> {
    /// Creates a new witness from a scalar value.
    pub fn new(x: G::Scalar) -> Self {
        Self { x }
    }

    /// Creates a witness from an integer, reducing it modulo `q`.
    pub fn from_uint(x: &BigUint) -> Self {
        Self {
            x: G::scalar_from_uint(x),
        }
    }

    /// Returns a reference to the secret scalar.
    pub(crate) fn secret(&self) -> &G::Scalar {
        &self.x
    }
}

/// Public statement: the public key `y = x * base_point`.
#[derive(Clone, Debug)]
pub struct Statement<G: Group> {
    y: G::Element,
}

impl<G: Group> Statement<G> {
    /// Creates a new statement from a public key.
    pub fn new(y: G::Element) -> Self {
        Self { y }
    }

    /// Computes the statement from parameters and witness: `y = x * base_point`.
    pub fn from_witness(params: &Parameters<G>, witness: &Witness<G>) -> Self {
        Self {
            y: G::scalar_mul(params.base_point(), witness.secret()),
        }
    }

    /// Returns the public key `y`.
    pub fn y(&self) -> &G::Element {
        &self.y
    }

    /// Validates that the public key is a point of the group.
    pub fn validate(&self) -> Result<()> {
        G::validate_element(&self.y)
    }
}

/// Wire record of a proof: exactly the keys `t` (hex point) and `s` (decimal integer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProofRecord {
    /// Commitment point.
    pub t: Value,
    /// Response scalar.
    pub s: Value,
}

/// Non-interactive proof of knowledge of a discrete logarithm.
///
/// The pair `(t, s)`: commitment `t = r * base_point` and response `s = r + c * x mod q`.
/// Immutable once constructed. Two proofs are equal iff their wire records are equal.
///
/// # Serialization
///
/// [`Proof::to_dict`] and [`Proof::from_dict`] convert to and from the structured
/// record; [`Proof::to_str`] and [`str::parse`] use its JSON text.
#[derive(Clone, Debug)]
pub struct Proof<G: Group> {
    t: G::Element,
    s: G::Scalar,
}

impl<G: Group> Proof<G> {
    /// Creates a new proof from commitment and response.
    ///
    /// This is typically called by [`Prover`](crate::Prover) and not directly by users.
    pub fn new(t: G::Element, s: G::Scalar) -> Self {
        Self { t, s }
    }

    /// Returns the commitment point `t`.
    pub fn t(&self) -> &G::Element {
        &self.t
    }

    /// Returns the response scalar `s`.
    pub fn s(&self) -> &G::Scalar {
        &self.s
    }

    /// Returns the wire record of this proof.
    pub fn to_record(&self) -> ProofRecord {
        ProofRecord {
            t: PointField::<G>::new().serialize(&self.t),
            s: BigIntegerField.serialize(&G::scalar_to_uint(&self.s)),
        }
    }

    /// Returns the structured form `{"t": <hex point>, "s": <decimal integer>}`.
    pub fn to_dict(&self) -> Value {
        let ProofRecord { t, s } = self.to_record();
        let mut map = Map::new();
        map.insert("t".to_string(), t);
        map.insert("s".to_string(), s);
        Value::Object(map)
    }

    /// Returns the JSON text of [`Proof::to_dict`].
    pub fn to_str(&self) -> String {
        self.to_dict().to_string()
    }

    /// Rebuilds a proof from its wire record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if `t` is not an encoded curve point or `s`
    /// is not a decimal integer in `[0, q)`.
    pub fn from_record(record: &ProofRecord) -> Result<Self> {
        let t = PointField::<G>::new()
            .deserialize(&record.t)
            .map_err(|e| rejected(format!("field `t`: {e}")))?;

        let s = BigIntegerField
            .deserialize(&record.s)
            .map_err(|e| rejected(format!("field `s`: {e}")))?;
        if &s >= G::order() {
            return Err(rejected(format!(
                "field `s`: response is not reduced modulo the {} group order",
                G::name()
            )));
        }

        Ok(Self {
            t,
            s: G::scalar_from_uint(&s),
        })
    }

    /// Rebuilds a proof from the structured form produced by [`Proof::to_dict`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the value is not a mapping with exactly the
    /// keys `t` and `s`, or if either is malformed.
    pub fn from_dict(data: &Value) -> Result<Self> {
        let record =
            ProofRecord::deserialize(data).map_err(|e| rejected(format!("proof record: {e}")))?;
        Self::from_record(&record)
    }
}

fn rejected(reason: String) -> Error {
    warn!(%reason, "rejected proof encoding");
    Error::Deserialization(reason)
}

impl<G: Group> PartialEq for Proof<G> {
    fn eq(&self, other: &Self) -> bool {
        self.to_record() == other.to_record()
    }
}

impl<G: Group> Eq for Proof<G> {}

impl<G: Group> fmt::Display for Proof<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str())
    }
}

impl<G: Group> FromStr for Proof<G> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_dict(&value)
    }
}

impl<G: Group> Serialize for Proof<G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de, G: Group> Deserialize<'de> for Proof<G> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let record = ProofRecord::deserialize(deserializer)?;
        Self::from_record(&record).map_err(serde::de::Error::custom)
    }
}

/// The proof as a serializer field, for embedding proofs in larger records.
#[derive(Clone, Copy, Debug)]
pub struct ProofField<G: Group>(core::marker::PhantomData<G>);

impl<G: Group> ProofField<G> {
    /// Creates a proof field for group `G`.
    pub fn new() -> Self {
        Self(core::marker::PhantomData)
    }
}

impl<G: Group> Default for ProofField<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Group> SerializerField for ProofField<G> {
    type Value = Proof<G>;

    fn serialize(&self, proof: &Proof<G>) -> Value {
        proof.to_dict()
    }

    fn deserialize(&self, data: &Value) -> Result<Proof<G>> {
        Proof::from_dict(data)
    }
}
