//! Entry point for the `placard-gateway` HTTP server.

use placard_gateway::{
    config::GatewayConfig,
    routes::{create_router, AppState},
};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = AppState::new(&config);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        keys = config.api_keys.len(),
        "placard-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
