//! Token signing configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which signing algorithm newly minted tokens use.
///
/// The other algorithm, when its key material is present, is kept as a
/// verification-only fallback so tokens issued under a previous
/// configuration stay valid through a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredAlgorithm {
    /// HMAC-SHA256 with a shared secret.
    Symmetric,
    /// RSA-SHA256 with a private/public key pair.
    Asymmetric,
}

/// Configuration for token signing and verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Algorithm used to mint new tokens.
    #[serde(default = "default_preferred")]
    pub preferred: PreferredAlgorithm,

    /// Shared secret for the symmetric algorithm.
    #[serde(default)]
    pub secret: Option<String>,

    /// Environment variable containing the shared secret (takes precedence
    /// over `secret`).
    #[serde(default)]
    pub secret_env: Option<String>,

    /// Path to the RSA private key (PEM). Optional; an instance without it
    /// can verify but not mint asymmetric tokens.
    #[serde(default)]
    pub private_key_file: Option<PathBuf>,

    /// Path to the RSA public key (PEM). Required for the asymmetric
    /// algorithm in any capacity.
    #[serde(default)]
    pub public_key_file: Option<PathBuf>,

    /// Default lifetime for newly minted tokens, in minutes.
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    /// When true, missing key material for the preferred algorithm or for
    /// the fallback is a startup failure instead of a logged substitution.
    #[serde(default)]
    pub strict: bool,
}

fn default_preferred() -> PreferredAlgorithm {
    PreferredAlgorithm::Symmetric
}

fn default_token_ttl_minutes() -> i64 {
    1440
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            preferred: default_preferred(),
            secret: None,
            secret_env: None,
            private_key_file: None,
            public_key_file: None,
            token_ttl_minutes: default_token_ttl_minutes(),
            strict: false,
        }
    }
}

impl AuthConfig {
    /// Resolve the shared secret from environment or inline value.
    pub fn resolve_secret(&self) -> Option<String> {
        if let Some(env_var) = &self.secret_env {
            if let Ok(secret) = std::env::var(env_var) {
                return Some(secret);
            }
        }
        self.secret.clone()
    }
}
