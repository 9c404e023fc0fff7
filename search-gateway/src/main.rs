use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use search_gateway::http::{router, AppState};
use search_gateway::{Dependencies, GatewayConfig, GatewayError};

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;
    let deps = Dependencies::new(config).await?;

    let state = AppState::new(deps.engine.clone(), deps.config.index.clone());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&deps.config.bind_addr).await?;
    info!(addr = %deps.config.bind_addr, "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway shutdown complete");
    Ok(())
}

/// Resolve when the process receives ctrl-c, letting the server drain
/// in-flight connections before exiting.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Received shutdown signal");
}
