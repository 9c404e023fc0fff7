//! Dependency initialization and wiring for the search gateway.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::GatewayConfig;
use crate::GatewayError;
use search_gateway_repository::{OpenSearchClient, SearchEngineClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The shared engine client handle, constructed once per process.
    pub engine: Arc<dyn SearchEngineClient>,
    /// The configuration the dependencies were built from.
    pub config: GatewayConfig,
}

impl Dependencies {
    /// Initialize all dependencies from the given configuration.
    ///
    /// The engine client is constructed once here and shared read-only for
    /// the process lifetime. The cluster is pinged so that an unreachable
    /// engine shows up in the logs at startup, but an unhealthy cluster does
    /// not prevent the gateway from serving: the health endpoint reports it.
    pub async fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        info!(
            engine_url = %config.engine_url,
            index = %config.index,
            "Initializing dependencies"
        );

        let client = OpenSearchClient::new(&config.engine_url, config.credentials())
            .map_err(|e| {
                GatewayError::config(format!("Failed to create search engine client: {}", e))
            })?;

        let engine: Arc<dyn SearchEngineClient> = Arc::new(client);

        match engine.ping().await {
            Ok(true) => info!("Search engine connection verified"),
            Ok(false) => warn!("Search engine reachable but not responding successfully"),
            Err(e) => warn!(error = %e, "Search engine unreachable at startup"),
        }

        Ok(Self { engine, config })
    }
}
