//! Token claims.

use serde::{Deserialize, Serialize};
use vitalis_core::{Principal, RoleKind};

/// The claim set carried by a token.
///
/// `sub` and `exp` are required on the wire; `role` and any application
/// claims are optional. Unknown claims pass through the flattened map
/// untouched. A verified claim set is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (the user id, as a string).
    pub sub: String,

    /// Absolute expiry as a unix timestamp. Set by the token service at
    /// mint time; callers never supply it.
    #[serde(default)]
    pub exp: i64,

    /// Role kind of the subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleKind>,

    /// Application-defined claims, passed through opaquely.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Claims {
    /// Create a claim set for a subject.
    pub fn new(sub: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            exp: 0,
            role: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the role claim.
    pub fn with_role(mut self, role: RoleKind) -> Self {
        self.role = Some(role);
        self
    }

    /// Attach an application-defined claim.
    pub fn with_claim(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Whether the expiry instant has passed.
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }

    /// Resolve the subject into a [`Principal`].
    ///
    /// Returns `None` when `sub` is not a numeric id or the role claim is
    /// absent; callers treat that the same as a failed verification.
    pub fn principal(&self) -> Option<Principal> {
        let id = self.sub.parse::<i64>().ok()?;
        let role = self.role?;
        Some(Principal::new(id, role))
    }
}
