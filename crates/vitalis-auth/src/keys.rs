//! Key material loading.
//!
//! All key IO and parsing happens here, at construction time. A key that
//! fails to load surfaces as an [`AuthError`] to the factory building the
//! strategy, never as a per-request decode failure.

use crate::error::AuthError;
use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::RngCore;
use std::path::Path;

/// Generate a random 256-bit shared secret, hex-encoded.
pub fn generate_secret() -> String {
    let mut rng = rand::rng();
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Read a PEM key file, mapping a missing file to a distinct error.
pub fn read_pem_file(path: &Path) -> Result<Vec<u8>, AuthError> {
    if !path.exists() {
        return Err(AuthError::KeyFileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read(path)?)
}

/// Parse an RSA private key (PEM) into a signing key.
pub fn rsa_encoding_key(pem: &[u8]) -> Result<EncodingKey, AuthError> {
    EncodingKey::from_rsa_pem(pem).map_err(|e| AuthError::InvalidPrivateKey(e.to_string()))
}

/// Parse an RSA public key (PEM) into a verification key.
pub fn rsa_decoding_key(pem: &[u8]) -> Result<DecodingKey, AuthError> {
    DecodingKey::from_rsa_pem(pem).map_err(|e| AuthError::InvalidPublicKey(e.to_string()))
}
