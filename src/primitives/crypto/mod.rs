/// Group trait and operations.
pub mod group;
/// Cryptographically secure random number generation.
pub mod rng;

pub use group::Group;
pub use rng::{RANDOM_NUMBER_BYTES, SecureRng, generate_random_number};
