//! Error types for token fixture operations

use thiserror::Error;

/// Token fixture errors
#[derive(Debug, Error)]
pub enum JwtError {
    /// The JOSE algorithm name is not registered
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The signature primitive rejected the key or the input
    #[error("Signing failed for {algorithm}: {reason}")]
    SigningFailure {
        /// JOSE algorithm name of the failed operation
        algorithm: String,
        /// Underlying cause reported by the primitive
        reason: String,
    },

    /// DER signature does not have the SEQUENCE-of-two-INTEGERs shape,
    /// or its padding is inconsistent
    #[error("Malformed signature encoding: {0}")]
    MalformedSignatureEncoding(String),

    /// Key material could not be parsed or generated
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// No built-in key exists for the requested algorithm
    #[error("Missing key: {0}")]
    MissingKey(String),

    /// Header or payload serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A length does not fit in a single byte
    #[error("Length {len} exceeds single byte maximum {max}")]
    LengthOverflow {
        /// Actual length in bytes
        len: usize,
        /// Largest length that can be encoded
        max: usize,
    },
}

impl JwtError {
    /// Create an unknown algorithm error
    #[inline]
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }

    /// Create a signing failure for the given algorithm
    #[inline]
    pub fn signing_failure(algorithm: &str, reason: impl ToString) -> Self {
        Self::SigningFailure {
            algorithm: algorithm.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a malformed signature encoding error
    #[inline]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedSignatureEncoding(msg.into())
    }

    /// Create an invalid key error
    #[inline]
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<der::Error> for JwtError {
    fn from(err: der::Error) -> Self {
        Self::MalformedSignatureEncoding(err.to_string())
    }
}

/// Result type for token fixture operations
pub type JwtResult<T> = Result<T, JwtError>;
