//! Config-driven construction of the token service.
//!
//! Called exactly once, at startup. Key-material problems surface here as
//! [`AuthError`]s; under lax configuration the factory substitutes or
//! drops a strategy deterministically with a logged warning, never
//! silently and never per-request.

use crate::error::AuthError;
use crate::service::TokenService;
use crate::strategy::{HmacStrategy, RsaStrategy, SigningStrategy};
use chrono::Duration;
use vitalis_core::{AuthConfig, PreferredAlgorithm};

/// Build the [`TokenService`] described by the configuration.
///
/// The preferred algorithm becomes the primary (minting) strategy; the
/// alternate algorithm joins the fallback list when its key material is
/// available. With `strict` set, any missing key material is a hard
/// startup failure. Without it, a failed asymmetric primary falls back to
/// the symmetric strategy with a warning (a missing shared secret is
/// always fatal), and unavailable fallback material is dropped with a
/// warning.
pub fn build_token_service(cfg: &AuthConfig) -> Result<TokenService, AuthError> {
    let default_ttl = Duration::minutes(cfg.token_ttl_minutes);

    match cfg.preferred {
        PreferredAlgorithm::Asymmetric => match build_rsa(cfg) {
            Ok(primary) => {
                let mut fallbacks: Vec<Box<dyn SigningStrategy>> = Vec::new();
                match cfg.resolve_secret() {
                    Some(secret) => fallbacks.push(Box::new(HmacStrategy::new(&secret))),
                    None if cfg.strict => return Err(AuthError::MissingSecret),
                    None => {
                        tracing::warn!("no shared secret configured; symmetric fallback disabled")
                    }
                }
                Ok(TokenService::new(Box::new(primary), fallbacks, default_ttl))
            }
            Err(err) if cfg.strict => Err(err),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "asymmetric key material unavailable; substituting symmetric primary"
                );
                let secret = cfg.resolve_secret().ok_or(AuthError::MissingSecret)?;
                Ok(TokenService::new(
                    Box::new(HmacStrategy::new(&secret)),
                    Vec::new(),
                    default_ttl,
                ))
            }
        },
        PreferredAlgorithm::Symmetric => {
            let secret = cfg.resolve_secret().ok_or(AuthError::MissingSecret)?;
            let primary = HmacStrategy::new(&secret);

            let mut fallbacks: Vec<Box<dyn SigningStrategy>> = Vec::new();
            if cfg.public_key_file.is_some() {
                match build_rsa(cfg) {
                    Ok(rsa) => fallbacks.push(Box::new(rsa)),
                    Err(err) if cfg.strict => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "asymmetric fallback unavailable; dropped");
                    }
                }
            }

            Ok(TokenService::new(Box::new(primary), fallbacks, default_ttl))
        }
    }
}

fn build_rsa(cfg: &AuthConfig) -> Result<RsaStrategy, AuthError> {
    let public = cfg
        .public_key_file
        .as_deref()
        .ok_or(AuthError::PublicKeyNotConfigured)?;
    RsaStrategy::from_pem_files(cfg.private_key_file.as_deref(), public)
}
