//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use dlog_proof::{Error, Group, Result};
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Initialize test tracing (call once at the beginning of tests).
///
/// Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("dlog_proof=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Modulus of the toy Schnorr group.
pub const TOY_P: u64 = 23;
/// Prime order of the toy subgroup.
pub const TOY_Q: u64 = 11;
/// Generator of the order-11 subgroup of `Z_23^*`.
pub const TOY_G: u64 = 4;

static TOY_ORDER: OnceLock<BigUint> = OnceLock::new();

/// Order-11 subgroup of the multiplicative group modulo 23.
///
/// Small enough to check every equation by hand. The group law is written additively
/// to match the curve groups: `element_add` multiplies residues and `scalar_mul`
/// exponentiates.
#[derive(Clone, Debug)]
pub struct ToyGroup;

#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct ToyScalar(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToyElement(pub u64);

pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    let mut result = 1;
    let mut base = base % modulus;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

/// Reduces an arbitrary integer modulo `TOY_Q`.
pub fn reduce_q(n: &BigUint) -> u64 {
    (n % TOY_Q).to_u64_digits().first().copied().unwrap_or(0)
}

impl Group for ToyGroup {
    type Scalar = ToyScalar;
    type Element = ToyElement;

    fn name() -> &'static str {
        "toy-23-11"
    }

    fn generator() -> ToyElement {
        ToyElement(TOY_G)
    }

    fn order() -> &'static BigUint {
        TOY_ORDER.get_or_init(|| BigUint::from(TOY_Q))
    }

    fn scalar_from_uint(n: &BigUint) -> ToyScalar {
        ToyScalar(reduce_q(n))
    }

    fn scalar_to_uint(s: &ToyScalar) -> BigUint {
        BigUint::from(s.0)
    }

    fn element_from_bytes(b: &[u8]) -> Result<ToyElement> {
        match b {
            [v] if (1..TOY_P).contains(&u64::from(*v))
                && mod_pow(u64::from(*v), TOY_Q, TOY_P) == 1 =>
            {
                Ok(ToyElement(u64::from(*v)))
            }
            _ => Err(Error::InvalidGroupElement(format!(
                "not an element of the toy subgroup: {b:?}"
            ))),
        }
    }

    fn element_to_bytes(e: &ToyElement) -> Vec<u8> {
        vec![e.0 as u8]
    }

    fn scalar_mul(e: &ToyElement, s: &ToyScalar) -> ToyElement {
        ToyElement(mod_pow(e.0, s.0, TOY_P))
    }

    fn element_add(a: &ToyElement, b: &ToyElement) -> ToyElement {
        ToyElement(a.0 * b.0 % TOY_P)
    }

    fn identity() -> ToyElement {
        ToyElement(1)
    }

    fn is_identity(element: &ToyElement) -> bool {
        element.0 == 1
    }

    fn validate_element(e: &ToyElement) -> Result<()> {
        Self::element_from_bytes(&Self::element_to_bytes(e)).map(|_| ())
    }

    fn scalar_add(a: &ToyScalar, b: &ToyScalar) -> ToyScalar {
        ToyScalar((a.0 + b.0) % TOY_Q)
    }

    fn scalar_mul_scalar(a: &ToyScalar, b: &ToyScalar) -> ToyScalar {
        ToyScalar(a.0 * b.0 % TOY_Q)
    }

    fn scalar_is_zero(s: &ToyScalar) -> bool {
        s.0 == 0
    }
}

/// Deterministic "randomness" that fills every byte with the same value.
pub struct FixedRng(pub u8);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_be_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_be_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}
