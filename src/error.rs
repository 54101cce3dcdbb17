//! Error types for discrete-logarithm proofs

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The secure randomness source could not produce bytes.
    #[error("Entropy source failure: {0}")]
    Entropy(#[from] rand_core::Error),

    /// A group element is invalid or not on the curve.
    #[error("Invalid group element: {0}")]
    InvalidGroupElement(String),

    /// Invalid group parameters were provided.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// A wire record could not be turned back into a value.
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// The textual form of a record is not valid JSON.
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
