use std::sync::Arc;
use vitalis_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cfg = vitalis_core::config::load_config()?;
    let state = Arc::new(AppState::init(&cfg)?);

    let app = vitalis_server::router(state.clone());

    let addr = state.cfg.server.bind.clone();
    tracing::info!("vitalis-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
