//! Configuration for the search gateway.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;

use crate::GatewayError;

/// Default search engine URL.
const DEFAULT_ENGINE_URL: &str = "http://localhost:9200";

/// Default index that documents are written to and read from.
const DEFAULT_INDEX: &str = "my-index";

/// Default HTTP bind address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Search engine cluster URL.
    pub engine_url: String,
    /// Basic-auth username, if the cluster requires authentication.
    pub username: Option<String>,
    /// Basic-auth password.
    pub password: Option<String>,
    /// The index all gateway operations are directed at.
    pub index: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl GatewayConfig {
    /// Read configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_URL`: cluster URL (default: http://localhost:9200)
    /// - `ELASTICSEARCH_USERNAME` / `ELASTICSEARCH_PASSWORD`: optional
    ///   basic-auth pair; must be set together
    /// - `ELASTICSEARCH_INDEX`: target index (default: my-index)
    /// - `GATEWAY_ADDR`: HTTP bind address (default: 0.0.0.0:8080)
    pub fn from_env() -> Result<Self, GatewayError> {
        let engine_url =
            env::var("ELASTICSEARCH_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
        let username = env::var("ELASTICSEARCH_USERNAME").ok();
        let password = env::var("ELASTICSEARCH_PASSWORD").ok();
        let index = env::var("ELASTICSEARCH_INDEX").unwrap_or_else(|_| DEFAULT_INDEX.to_string());
        let bind_addr = env::var("GATEWAY_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let config = Self {
            engine_url,
            username,
            password,
            index,
            bind_addr,
        };
        config.validate()?;

        Ok(config)
    }

    /// Check internal consistency of the configuration.
    fn validate(&self) -> Result<(), GatewayError> {
        if self.username.is_some() != self.password.is_some() {
            return Err(GatewayError::config(
                "ELASTICSEARCH_USERNAME and ELASTICSEARCH_PASSWORD must be set together",
            ));
        }
        if self.index.is_empty() {
            return Err(GatewayError::config("ELASTICSEARCH_INDEX must not be empty"));
        }
        Ok(())
    }

    /// Basic-auth credential pair, if configured.
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        }
    }
}
