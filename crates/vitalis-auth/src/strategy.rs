//! Signing strategies.
//!
//! A strategy is bound to exactly one algorithm and holds exactly the key
//! material its variant needs. Decoding checks the token's header
//! algorithm against the strategy's own tag before any signature work, so
//! a token is never accepted under an algorithm other than the one it was
//! signed with.

use crate::claims::Claims;
use crate::error::{AuthError, DecodeError};
use crate::keys;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::path::Path;

/// One algorithm-bound token signing/verification implementation.
pub trait SigningStrategy: Send + Sync {
    /// The algorithm tag this strategy signs and verifies under.
    fn algorithm(&self) -> Algorithm;

    /// Sign a claim set into a compact token.
    fn encode(&self, claims: &Claims) -> Result<String, AuthError>;

    /// Verify a token and extract its claims.
    ///
    /// Failures are values, not configuration errors; the caller decides
    /// whether another strategy gets a turn.
    fn decode(&self, token: &str) -> Result<Claims, DecodeError>;
}

fn decode_checked(
    token: &str,
    key: &DecodingKey,
    algorithm: Algorithm,
) -> Result<Claims, DecodeError> {
    let header = jsonwebtoken::decode_header(token).map_err(|_| DecodeError::Malformed)?;
    if header.alg != algorithm {
        return Err(DecodeError::AlgorithmMismatch);
    }

    let mut validation = Validation::new(algorithm);
    // No leeway: a token expired by one second is expired.
    validation.leeway = 0;

    let data = jsonwebtoken::decode::<Claims>(token, key, &validation)?;
    Ok(data.claims)
}

/// HMAC-SHA256 strategy using a shared secret.
pub struct HmacStrategy {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl HmacStrategy {
    pub fn new(secret: &str) -> Self {
        tracing::debug!(secret_len = secret.len(), "symmetric strategy created");
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl SigningStrategy for HmacStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HS256
    }

    fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::TokenCreationFailed(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        decode_checked(token, &self.decoding, Algorithm::HS256)
    }
}

/// RSA-SHA256 strategy using a private/public key pair.
///
/// The private key is optional: a verify-only instance can sit in the
/// fallback list without signing capability. The public key is required
/// and parsed at construction, so key problems surface to the factory
/// rather than at request time.
pub struct RsaStrategy {
    encoding: Option<EncodingKey>,
    decoding: DecodingKey,
}

impl RsaStrategy {
    /// Build a strategy from PEM-encoded key material.
    pub fn from_pem(private: Option<&[u8]>, public: &[u8]) -> Result<Self, AuthError> {
        let encoding = private.map(keys::rsa_encoding_key).transpose()?;
        let decoding = keys::rsa_decoding_key(public)?;
        Ok(Self { encoding, decoding })
    }

    /// Build a strategy from PEM key files.
    ///
    /// A configured-but-absent private key file downgrades the instance
    /// to verify-only with a warning; an absent public key file is an
    /// error.
    pub fn from_pem_files(private: Option<&Path>, public: &Path) -> Result<Self, AuthError> {
        let private_pem = match private {
            Some(path) if path.exists() => Some(std::fs::read(path)?),
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "private key file not found; asymmetric strategy is verify-only"
                );
                None
            }
            None => None,
        };
        let public_pem = keys::read_pem_file(public)?;
        Self::from_pem(private_pem.as_deref(), &public_pem)
    }

    /// Whether this instance holds signing key material.
    pub fn can_sign(&self) -> bool {
        self.encoding.is_some()
    }
}

impl SigningStrategy for RsaStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RS256
    }

    fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        let key = self.encoding.as_ref().ok_or(AuthError::MissingSigningKey)?;
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), claims, key)
            .map_err(|e| AuthError::TokenCreationFailed(e.to_string()))
    }

    fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        decode_checked(token, &self.decoding, Algorithm::RS256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkeys::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY};
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use chrono::Utc;
    use vitalis_core::RoleKind;

    fn claims_expiring_in(seconds: i64) -> Claims {
        let mut claims = Claims::new("42").with_role(RoleKind::User);
        claims.exp = Utc::now().timestamp() + seconds;
        claims
    }

    fn rsa_full() -> RsaStrategy {
        RsaStrategy::from_pem(Some(TEST_PRIVATE_KEY.as_bytes()), TEST_PUBLIC_KEY.as_bytes())
            .unwrap()
    }

    #[test]
    fn hmac_roundtrip() {
        let strategy = HmacStrategy::new("s1");
        let claims = claims_expiring_in(3600);

        let token = strategy.encode(&claims).unwrap();
        let decoded = strategy.decode(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn hmac_rejects_wrong_secret() {
        let token = HmacStrategy::new("s1").encode(&claims_expiring_in(3600)).unwrap();
        let err = HmacStrategy::new("s2").decode(&token).unwrap_err();
        assert_eq!(err, DecodeError::InvalidSignature);
    }

    #[test]
    fn expired_token_is_rejected() {
        let strategy = HmacStrategy::new("s1");
        let token = strategy.encode(&claims_expiring_in(-1)).unwrap();
        assert_eq!(strategy.decode(&token).unwrap_err(), DecodeError::Expired);
    }

    #[test]
    fn rsa_roundtrip() {
        let strategy = rsa_full();
        let claims = claims_expiring_in(3600);

        let token = strategy.encode(&claims).unwrap();
        let decoded = strategy.decode(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn verify_only_rsa_refuses_to_encode() {
        let verify_only = RsaStrategy::from_pem(None, TEST_PUBLIC_KEY.as_bytes()).unwrap();
        assert!(!verify_only.can_sign());

        let err = verify_only.encode(&claims_expiring_in(3600)).unwrap_err();
        assert!(matches!(err, AuthError::MissingSigningKey));

        // Verification is unaffected by the missing private key.
        let token = rsa_full().encode(&claims_expiring_in(3600)).unwrap();
        verify_only.decode(&token).unwrap();
    }

    #[test]
    fn algorithm_mismatch_is_checked_before_signatures() {
        let hmac = HmacStrategy::new("s1");
        let rsa = rsa_full();

        let hmac_token = hmac.encode(&claims_expiring_in(3600)).unwrap();
        let rsa_token = rsa.encode(&claims_expiring_in(3600)).unwrap();

        assert_eq!(rsa.decode(&hmac_token).unwrap_err(), DecodeError::AlgorithmMismatch);
        assert_eq!(hmac.decode(&rsa_token).unwrap_err(), DecodeError::AlgorithmMismatch);
    }

    #[test]
    fn confused_algorithm_token_is_rejected() {
        // Classic confusion attack: sign an HS256 token using the RSA
        // public key as the HMAC secret, then present it to the RSA
        // strategy. The header tag check must reject it outright.
        let forged = HmacStrategy::new(TEST_PUBLIC_KEY)
            .encode(&claims_expiring_in(3600))
            .unwrap();

        let err = rsa_full().decode(&forged).unwrap_err();
        assert_eq!(err, DecodeError::AlgorithmMismatch);
    }

    #[test]
    fn tampered_payload_fails_signature_check() {
        let strategy = HmacStrategy::new("s1");
        let token = strategy.encode(&claims_expiring_in(3600)).unwrap();

        let mut segments: Vec<&str> = token.split('.').collect();
        let payload = URL_SAFE_NO_PAD.decode(segments[1]).unwrap();
        let tampered_json = String::from_utf8(payload).unwrap().replace("\"42\"", "\"1\"");
        let tampered = URL_SAFE_NO_PAD.encode(tampered_json.as_bytes());
        segments[1] = &tampered;
        let forged = segments.join(".");

        assert_eq!(strategy.decode(&forged).unwrap_err(), DecodeError::InvalidSignature);
    }

    #[test]
    fn garbage_token_is_malformed() {
        let strategy = HmacStrategy::new("s1");
        assert_eq!(strategy.decode("not-a-token").unwrap_err(), DecodeError::Malformed);
        assert_eq!(strategy.decode("a.b.c").unwrap_err(), DecodeError::Malformed);
        assert_eq!(strategy.decode("").unwrap_err(), DecodeError::Malformed);
    }
}
