//! HTTP seam for the Vitalis auth core.
//!
//! Exposes the two contracts the route handlers consume: resolving a
//! bearer token to a [`Principal`](vitalis_core::Principal) (401 on
//! failure) and authorization guards (403 on failure). Route handlers for
//! uploads, analysis and administration mount on this scaffold.

pub mod middleware;
pub mod state;

use axum::{Extension, Json, Router, routing::get};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use vitalis_core::Principal;

use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/me", get(me))
        .layer(axum::middleware::from_fn(middleware::auth::authenticate));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", protected)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "vitalis-server" }))
}

/// Echo the authenticated principal.
async fn me(Extension(principal): Extension<Principal>) -> Json<serde_json::Value> {
    Json(json!({ "id": principal.id, "role": principal.role }))
}
