//! Shared application state.

use std::sync::Arc;
use vitalis_auth::{TokenService, build_token_service};
use vitalis_core::AppConfig;

/// Process-wide shared state.
///
/// Built once at startup, before the listener starts, and handed to the
/// router by reference; every request task observes the same immutable
/// token service.
pub struct AppState {
    pub cfg: AppConfig,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Construct the state, building the token service from
    /// configuration. A key-material error here aborts startup.
    pub fn init(cfg: &AppConfig) -> anyhow::Result<Self> {
        let tokens = build_token_service(&cfg.auth)?;
        Ok(Self {
            cfg: cfg.clone(),
            tokens: Arc::new(tokens),
        })
    }
}
