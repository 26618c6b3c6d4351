//! Bearer-token authentication and authorization guards.
//!
//! The 401/403 split matters: a missing, invalid or expired token is an
//! authentication failure (401); a known principal lacking a permission
//! or failing the ownership rule is an authorization failure (403).

use crate::state::AppState;
use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use vitalis_core::Principal;
use vitalis_rbac::{Permission, PermissionChecker, RbacError, Resource};

/// Axum middleware resolving the bearer token to a [`Principal`].
///
/// Verifies the token against the service's strategy chain, then requires
/// a numeric `sub` and a role claim. The principal lands in the request
/// extensions for handlers and downstream guards.
pub async fn authenticate(mut req: Request, next: Next) -> Result<Response, StatusCode> {
    let state = req
        .extensions()
        .get::<Arc<AppState>>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let token = extract_bearer(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;
    let claims = state.tokens.verify(&token).ok_or(StatusCode::UNAUTHORIZED)?;
    let principal = claims.principal().ok_or(StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

/// Axum middleware requiring an admin principal. Layers after
/// [`authenticate`].
pub async fn require_admin(req: Request, next: Next) -> Result<Response, StatusCode> {
    let principal = req
        .extensions()
        .get::<Principal>()
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !PermissionChecker::new(principal).is_admin() {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(req).await)
}

/// Require a permission for the principal, mapped for handler use.
pub fn require_permission(
    principal: &Principal,
    permission: Permission,
) -> Result<(), (StatusCode, String)> {
    PermissionChecker::new(principal)
        .require(permission)
        .map_err(reject)
}

/// Require ownership of a resource instance (admins bypass).
pub fn require_ownership(
    principal: &Principal,
    owner_id: i64,
    resource: Resource,
) -> Result<(), (StatusCode, String)> {
    PermissionChecker::new(principal)
        .require_ownership(owner_id, resource)
        .map_err(reject)
}

fn reject(err: RbacError) -> (StatusCode, String) {
    (StatusCode::FORBIDDEN, err.to_string())
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?;
    let rest = value.strip_prefix("Bearer ")?.trim();
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_string())
}
