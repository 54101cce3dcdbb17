use core::fmt::Debug;

use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::Result;

/// Trait for prime-order groups used by the discrete-logarithm proof.
///
/// Implementations provide point arithmetic for elements and arithmetic modulo the
/// group order `q` for scalars, plus the canonical byte encoding of elements that
/// the Fiat-Shamir hash consumes.
pub trait Group: Clone + Debug + Send + Sync + 'static {
    /// Scalar type for this group (exponents/discrete logs), always in `[0, q)`.
    ///
    /// Scalars must be zeroizable for security.
    type Scalar: Clone + Debug + Eq + PartialEq + Zeroize + Send + Sync;

    /// Element type for this group (curve points).
    type Element: Clone + Debug + Eq + PartialEq + Send + Sync;

    /// Returns the name of this group implementation.
    fn name() -> &'static str;

    /// Returns the distinguished generator `G`.
    fn generator() -> Self::Element;

    /// Returns the prime order `q` of the group.
    fn order() -> &'static BigUint;

    /// Converts an unsigned integer of any size into a scalar, reducing modulo `q`.
    fn scalar_from_uint(n: &BigUint) -> Self::Scalar;

    /// Returns the canonical integer in `[0, q)` for a scalar.
    fn scalar_to_uint(s: &Self::Scalar) -> BigUint;

    /// Deserializes a group element from its canonical encoding.
    fn element_from_bytes(b: &[u8]) -> Result<Self::Element>;

    /// Serializes a group element to its canonical encoding.
    fn element_to_bytes(e: &Self::Element) -> Vec<u8>;

    /// Performs scalar multiplication: `scalar * element`.
    fn scalar_mul(e: &Self::Element, s: &Self::Scalar) -> Self::Element;

    /// Adds two group elements: `a + b`.
    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Returns the identity element of the group.
    fn identity() -> Self::Element;

    /// Checks if an element is the identity.
    fn is_identity(element: &Self::Element) -> bool;

    /// Validates that an element is a point of the group.
    fn validate_element(e: &Self::Element) -> Result<()>;

    /// Adds two scalars modulo `q`.
    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Multiplies two scalars modulo `q`.
    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Checks if a scalar is zero.
    fn scalar_is_zero(s: &Self::Scalar) -> bool;
}
