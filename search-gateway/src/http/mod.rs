//! HTTP surface for the search gateway.
//!
//! Routes, shared request state, and the handlers that translate between
//! HTTP and the search engine client.

mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::health::HealthProbe;
use search_gateway_repository::SearchEngineClient;

/// Shared state available to every request handler.
///
/// Holds the single long-lived engine client; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// The shared engine client handle.
    pub engine: Arc<dyn SearchEngineClient>,
    /// The index all gateway operations are directed at.
    pub index: String,
    /// Probe backing the health endpoint.
    pub probe: HealthProbe,
}

impl AppState {
    /// Create the request state over the shared engine client.
    pub fn new(engine: Arc<dyn SearchEngineClient>, index: impl Into<String>) -> Self {
        let probe = HealthProbe::new(engine.clone());
        Self {
            engine,
            index: index.into(),
            probe,
        }
    }
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/elasticsearch/index", post(handlers::index_document))
        .route("/api/elasticsearch/get/:id", get(handlers::get_document))
        .route("/api/elasticsearch/search", get(handlers::search_documents))
        .route("/health", get(handlers::health))
        .layer(Extension(state))
}
