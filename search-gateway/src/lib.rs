//! # Search Gateway
//!
//! HTTP gateway exposing index, get-by-id, and search operations backed by a
//! search engine cluster, plus a health endpoint that pings the cluster.
//!
//! This crate provides the entry point, configuration, and HTTP surface for
//! running the gateway.

pub mod config;
pub mod health;
pub mod http;

pub use config::{Dependencies, GatewayConfig};

use thiserror::Error;

/// Errors that can occur during gateway startup or execution.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] search_gateway_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GatewayError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
