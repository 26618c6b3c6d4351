//! The token service: minting and the verification fallback chain.

use crate::claims::Claims;
use crate::error::AuthError;
use crate::strategy::SigningStrategy;
use chrono::{Duration, Utc};
use jsonwebtoken::Algorithm;

/// Issues tokens with one primary strategy and verifies them against the
/// primary plus an ordered list of verification-only fallbacks.
///
/// Constructed once at startup and shared immutably (`Arc`) across
/// request tasks; `mint` and `verify` take `&self` and need no locking.
pub struct TokenService {
    primary: Box<dyn SigningStrategy>,
    fallbacks: Vec<Box<dyn SigningStrategy>>,
    default_ttl: Duration,
}

impl TokenService {
    pub fn new(
        primary: Box<dyn SigningStrategy>,
        fallbacks: Vec<Box<dyn SigningStrategy>>,
        default_ttl: Duration,
    ) -> Self {
        tracing::info!(
            primary = ?primary.algorithm(),
            fallbacks = ?fallbacks.iter().map(|s| s.algorithm()).collect::<Vec<_>>(),
            "token service created"
        );
        Self {
            primary,
            fallbacks,
            default_ttl,
        }
    }

    /// Mint a token for the given claims, signed by the primary strategy.
    ///
    /// The caller's claims are copied and `exp` is set to `now + ttl`
    /// (the configured default when `ttl` is `None`). Fallback strategies
    /// are never consulted here.
    pub fn mint(&self, claims: &Claims, ttl: Option<Duration>) -> Result<String, AuthError> {
        let mut to_encode = claims.clone();
        let expire = Utc::now() + ttl.unwrap_or(self.default_ttl);
        to_encode.exp = expire.timestamp();

        let token = self.primary.encode(&to_encode)?;
        tracing::debug!(
            algorithm = ?self.primary.algorithm(),
            sub = %to_encode.sub,
            "token minted"
        );
        Ok(token)
    }

    /// Verify a token, trying the primary strategy then each fallback in
    /// declared order.
    ///
    /// Returns the first successful claim set, or `None` when every
    /// strategy declines — the definitive "invalid or expired" signal.
    /// Per-strategy misses are expected during rotation and logged only
    /// at debug level.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match self.primary.decode(token) {
            Ok(claims) => return Some(claims),
            Err(reason) => {
                tracing::debug!(
                    algorithm = ?self.primary.algorithm(),
                    %reason,
                    "primary strategy declined token"
                );
            }
        }

        for strategy in &self.fallbacks {
            match strategy.decode(token) {
                Ok(claims) => {
                    tracing::debug!(
                        algorithm = ?strategy.algorithm(),
                        "token verified via fallback strategy"
                    );
                    return Some(claims);
                }
                Err(reason) => {
                    tracing::debug!(
                        algorithm = ?strategy.algorithm(),
                        %reason,
                        "fallback strategy declined token"
                    );
                }
            }
        }

        tracing::debug!("token declined by every configured strategy");
        None
    }

    /// The algorithm newly minted tokens are signed under.
    pub fn algorithm(&self) -> Algorithm {
        self.primary.algorithm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::strategy::{HmacStrategy, RsaStrategy};
    use crate::testkeys::{TEST_PRIVATE_KEY, TEST_PUBLIC_KEY};
    use std::sync::Mutex;
    use vitalis_core::RoleKind;

    fn rsa_full() -> RsaStrategy {
        RsaStrategy::from_pem(Some(TEST_PRIVATE_KEY.as_bytes()), TEST_PUBLIC_KEY.as_bytes())
            .unwrap()
    }

    fn day() -> Duration {
        Duration::hours(24)
    }

    #[test]
    fn mint_then_verify_roundtrips_claims() {
        let service = TokenService::new(Box::new(HmacStrategy::new("s1")), vec![], day());

        let claims = Claims::new("42")
            .with_role(RoleKind::User)
            .with_claim("device", serde_json::json!("tablet"));
        let token = service.mint(&claims, None).unwrap();

        let verified = service.verify(&token).unwrap();
        assert_eq!(verified.sub, claims.sub);
        assert_eq!(verified.role, claims.role);
        assert_eq!(verified.extra, claims.extra);
        assert!(verified.exp > Utc::now().timestamp());
    }

    #[test]
    fn negative_ttl_mints_an_already_expired_token() {
        let service = TokenService::new(Box::new(HmacStrategy::new("s1")), vec![], day());
        let token = service
            .mint(&Claims::new("42"), Some(Duration::seconds(-1)))
            .unwrap();
        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn verify_walks_fallbacks_in_declared_order() {
        // Only the second fallback can decode the token; the first must
        // have been attempted (and recorded) before it.
        struct Recording<S> {
            inner: S,
            log: &'static Mutex<Vec<&'static str>>,
            tag: &'static str,
        }

        impl<S: SigningStrategy> SigningStrategy for Recording<S> {
            fn algorithm(&self) -> Algorithm {
                self.inner.algorithm()
            }
            fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
                self.inner.encode(claims)
            }
            fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
                self.log.lock().unwrap().push(self.tag);
                self.inner.decode(token)
            }
        }

        static LOG: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

        let issuer = TokenService::new(Box::new(HmacStrategy::new("s2")), vec![], day());
        let token = issuer.mint(&Claims::new("42"), None).unwrap();

        let service = TokenService::new(
            Box::new(Recording { inner: HmacStrategy::new("s1"), log: &LOG, tag: "primary" }),
            vec![
                Box::new(Recording { inner: rsa_full(), log: &LOG, tag: "f1" }),
                Box::new(Recording { inner: HmacStrategy::new("s2"), log: &LOG, tag: "f2" }),
            ],
            day(),
        );

        let verified = service.verify(&token).unwrap();
        assert_eq!(verified.sub, "42");
        assert_eq!(*LOG.lock().unwrap(), vec!["primary", "f1", "f2"]);
    }

    #[test]
    fn minting_never_depends_on_fallbacks() {
        let with_fallbacks = TokenService::new(
            Box::new(HmacStrategy::new("s1")),
            vec![Box::new(rsa_full())],
            day(),
        );
        let without = TokenService::new(Box::new(HmacStrategy::new("s1")), vec![], day());

        let token = with_fallbacks.mint(&Claims::new("42"), None).unwrap();
        // Decodable by a service holding only the primary strategy.
        assert!(without.verify(&token).is_some());
    }

    #[test]
    fn exhausted_chain_returns_none() {
        let service = TokenService::new(
            Box::new(HmacStrategy::new("s1")),
            vec![Box::new(rsa_full())],
            day(),
        );
        assert!(service.verify("not-a-token").is_none());

        let foreign = TokenService::new(Box::new(HmacStrategy::new("other")), vec![], day());
        let token = foreign.mint(&Claims::new("42"), None).unwrap();
        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn rotation_keeps_previously_issued_tokens_valid() {
        // Before rotation: symmetric primary, asymmetric fallback.
        let before = TokenService::new(
            Box::new(HmacStrategy::new("s1")),
            vec![Box::new(rsa_full())],
            day(),
        );
        let token = before.mint(&Claims::new("42").with_role(RoleKind::User), None).unwrap();
        assert_eq!(before.verify(&token).unwrap().sub, "42");

        // After rotation: asymmetric primary, the old symmetric strategy
        // demoted to fallback. The very same token must still verify.
        let after = TokenService::new(
            Box::new(rsa_full()),
            vec![Box::new(HmacStrategy::new("s1"))],
            day(),
        );
        assert_eq!(after.verify(&token).unwrap().sub, "42");

        // And with the old strategy dropped entirely, it must not.
        let dropped = TokenService::new(Box::new(rsa_full()), vec![], day());
        assert!(dropped.verify(&token).is_none());
    }
}
