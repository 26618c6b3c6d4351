//! Error types for token handling.
//!
//! Two disjoint classes. [`AuthError`] covers configuration mistakes:
//! missing or unparseable key material, encode failures. These propagate
//! to whoever constructs the strategy or service and must keep it out of
//! service. [`DecodeError`] covers per-request verification failures; it
//! is an ordinary value that drives the fallback chain, never an error to
//! bubble up.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that indicate a deployment or configuration mistake.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Encoding was attempted on a strategy without signing key material.
    #[error("no signing key material is loaded for this strategy")]
    MissingSigningKey,

    /// No shared secret is configured for the symmetric strategy.
    #[error("no shared secret configured for the symmetric strategy")]
    MissingSecret,

    /// The asymmetric strategy has no public key file configured.
    #[error("no public key file configured for the asymmetric strategy")]
    PublicKeyNotConfigured,

    /// A required key file does not exist.
    #[error("key file not found: {path}")]
    KeyFileNotFound { path: PathBuf },

    /// Failed to parse private key material.
    #[error("failed to parse private key: {0}")]
    InvalidPrivateKey(String),

    /// Failed to parse public key material.
    #[error("failed to parse public key: {0}")]
    InvalidPublicKey(String),

    /// Failed to sign a claim set.
    #[error("failed to create token: {0}")]
    TokenCreationFailed(String),

    /// IO error (reading key files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single strategy declined a token.
///
/// Uniformly returned by [`SigningStrategy::decode`]: the token service
/// treats every variant the same way (try the next strategy) while tests
/// and diagnostics can still tell them apart.
///
/// [`SigningStrategy::decode`]: crate::strategy::SigningStrategy::decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The `exp` claim is in the past.
    #[error("token has expired")]
    Expired,

    /// The token's header algorithm is not this strategy's algorithm.
    #[error("token algorithm does not match this strategy")]
    AlgorithmMismatch,

    /// The signature does not verify under this strategy's key.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// The token is not three well-formed base64url segments, or its
    /// claims are missing required fields.
    #[error("token is malformed")]
    Malformed,
}

impl From<jsonwebtoken::errors::Error> for DecodeError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => DecodeError::Expired,
            ErrorKind::InvalidSignature => DecodeError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => DecodeError::AlgorithmMismatch,
            _ => DecodeError::Malformed,
        }
    }
}
