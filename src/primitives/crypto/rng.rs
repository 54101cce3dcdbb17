//! Cryptographically secure random number generation.

use num_bigint::BigUint;
use rand_core::{CryptoRng, CryptoRngCore, OsRng, RngCore};
use zeroize::Zeroize;

use crate::Result;

/// Number of random bytes drawn for a nonce, matching the 256-bit group order.
pub const RANDOM_NUMBER_BYTES: usize = 32;

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library.
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Draws 32 fresh bytes from `rng` and reads them as a big-endian unsigned integer.
///
/// The result is not reduced modulo any group order; callers reduce at the point of use.
///
/// # Errors
///
/// Returns [`Error::Entropy`](crate::Error::Entropy) if the source cannot produce bytes.
pub fn generate_random_number<R: CryptoRngCore>(rng: &mut R) -> Result<BigUint> {
    let mut buf = [0u8; RANDOM_NUMBER_BYTES];
    rng.try_fill_bytes(&mut buf)?;
    let n = BigUint::from_bytes_be(&buf);
    buf.zeroize();
    Ok(n)
}
