//! Error types for RFC 3961 operations.
//!
//! This module provides a unified error type for key derivation, string-to-key,
//! s2kparams decoding and PRF computation. Error messages never carry key
//! material, secrets or salts.

use thiserror::Error;

/// Errors that can occur when deriving Kerberos keys.
#[derive(Debug, Error)]
pub enum Rfc3961Error {
    /// The s2kparams string is not exactly 8 characters long.
    #[error("Invalid s2kparams length: expected 8 hex characters, got {0}")]
    InvalidS2kParamsLength(usize),

    /// The s2kparams string contains non-hexadecimal characters.
    #[error("Invalid s2kparams, cannot decode hex: {0}")]
    InvalidS2kParamsHex(#[from] hex::FromHexError),

    /// A string-to-key iteration count of zero was requested.
    #[error("Iteration count must be at least 1")]
    ZeroIterations,

    /// The iteration count cannot be represented by the PBKDF2 backend
    /// or lies outside `[1, 2^32]`.
    #[error("Iteration count {0} is out of range")]
    IterationsOutOfRange(u64),

    /// The iteration count is above a caller-supplied ceiling.
    #[error("Iteration count {iterations} exceeds the limit of {limit}")]
    IterationLimitExceeded {
        /// Requested iteration count.
        iterations: u64,
        /// Ceiling supplied by the caller.
        limit: u64,
    },

    /// The usage constant is empty.
    #[error("Usage constant must not be empty")]
    EmptyUsage,

    /// The key material has the wrong size for the encryption type.
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Size required by the encryption type.
        expected: usize,
        /// Size that was supplied.
        actual: usize,
    },

    /// The hash digest is shorter than the message block it must fill.
    #[error("Hash output is shorter than the message block size")]
    HashOutputTooShort,

    /// The encryption type's encrypt operation failed.
    /// Intentionally vague for security.
    #[error("Encryption failed")]
    EncryptionFailed,

    /// PBKDF2 rejected its parameters.
    #[error("Key derivation failed")]
    KeyDerivationFailed,
}

impl Rfc3961Error {
    /// Returns `true` for malformed wire input (s2kparams), as opposed to a
    /// failure of an underlying cryptographic primitive.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidS2kParamsLength(_) | Self::InvalidS2kParamsHex(_)
        )
    }
}

/// Result type alias for RFC 3961 operations.
pub type Rfc3961Result<T> = Result<T, Rfc3961Error>;
