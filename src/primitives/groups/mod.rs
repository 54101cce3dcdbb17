/// NIST P-256 (secp256r1) group implementation.
pub mod p256;
/// secp256k1 group implementation (default).
pub mod secp256k1;

pub use self::p256::P256;
pub use self::secp256k1::Secp256k1;
