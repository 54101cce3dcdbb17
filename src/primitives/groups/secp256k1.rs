//! secp256k1 elliptic curve group implementation.
//!
//! This is the default group. It provides approximately 128 bits of security
//! against classical attacks.

use std::sync::OnceLock;

use k256::elliptic_curve::group::Group as CurveGroup;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, EncodedPoint, ProjectivePoint, Scalar as K256Scalar};
use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::{Error, Group, Result};

/// Number of bytes in a secp256k1 scalar (32 bytes).
const SECP256K1_SCALAR_BYTES: usize = 32;

/// Number of bytes in a compressed secp256k1 point (1 byte prefix + 32 byte x-coordinate).
const SECP256K1_COMPRESSED_BYTES: usize = 33;

/// Group order `q`, big-endian hex.
const SECP256K1_ORDER_HEX: &[u8] =
    b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

static ORDER: OnceLock<BigUint> = OnceLock::new();

/// secp256k1 elliptic curve group implementation.
#[derive(Clone, Debug)]
pub struct Secp256k1;

/// Scalar in the secp256k1 group.
///
/// Scalars are automatically zeroized when dropped for security.
#[derive(Clone, Debug)]
pub struct Scalar(K256Scalar);

/// Element (point) in the secp256k1 group.
///
/// Points are stored in projective coordinates and encoded in compressed SEC1 form.
#[derive(Clone, Debug)]
pub struct Element(ProjectivePoint);

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0 = K256Scalar::ZERO;
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_affine().eq(&other.0.to_affine())
    }
}

impl Eq for Element {}

impl Group for Secp256k1 {
    type Scalar = Scalar;
    type Element = Element;

    fn name() -> &'static str {
        "secp256k1"
    }

    fn generator() -> Self::Element {
        Element(ProjectivePoint::GENERATOR)
    }

    fn order() -> &'static BigUint {
        ORDER.get_or_init(|| {
            BigUint::parse_bytes(SECP256K1_ORDER_HEX, 16)
                .unwrap_or_else(|| unreachable!("secp256k1 order constant is valid hex"))
        })
    }

    fn scalar_from_uint(n: &BigUint) -> Self::Scalar {
        let reduced = n % Self::order();
        let bytes = reduced.to_bytes_be();

        let mut repr = [0u8; SECP256K1_SCALAR_BYTES];
        repr[SECP256K1_SCALAR_BYTES - bytes.len()..].copy_from_slice(&bytes);

        let scalar = Option::<K256Scalar>::from(K256Scalar::from_repr(repr.into()))
            .unwrap_or_else(|| unreachable!("value reduced modulo q is a canonical scalar"));
        repr.zeroize();
        Scalar(scalar)
    }

    fn scalar_to_uint(scalar: &Self::Scalar) -> BigUint {
        BigUint::from_bytes_be(&scalar.0.to_repr())
    }

    fn element_from_bytes(bytes: &[u8]) -> Result<Self::Element> {
        if bytes.len() != SECP256K1_COMPRESSED_BYTES {
            return Err(Error::InvalidGroupElement(format!(
                "Expected {} bytes, got {}",
                SECP256K1_COMPRESSED_BYTES,
                bytes.len()
            )));
        }

        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|_| Error::InvalidGroupElement("Failed to parse encoded point".to_string()))?;

        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or_else(|| {
                Error::InvalidGroupElement(
                    "Bytes do not represent a valid secp256k1 point".to_string(),
                )
            })?;

        Ok(Element(ProjectivePoint::from(affine)))
    }

    fn element_to_bytes(element: &Self::Element) -> Vec<u8> {
        let affine = element.0.to_affine();
        affine.to_encoded_point(true).as_bytes().to_vec()
    }

    fn scalar_mul(element: &Self::Element, scalar: &Self::Scalar) -> Self::Element {
        Element(element.0 * scalar.0)
    }

    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0 + b.0)
    }

    fn identity() -> Self::Element {
        Element(ProjectivePoint::IDENTITY)
    }

    fn is_identity(element: &Self::Element) -> bool {
        element.0.is_identity().into()
    }

    fn validate_element(element: &Self::Element) -> Result<()> {
        if bool::from(element.0.is_identity()) {
            return Ok(());
        }

        let affine = element.0.to_affine();
        let encoded = affine.to_encoded_point(true);
        match Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded)) {
            Some(decoded) if decoded == affine => Ok(()),
            _ => Err(Error::InvalidGroupElement(
                "Element failed recompression validation".to_string(),
            )),
        }
    }

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_is_zero(scalar: &Self::Scalar) -> bool {
        scalar.0.is_zero().into()
    }
}
