//! Health probe for the search engine connection.

use std::sync::Arc;

use search_gateway_repository::SearchEngineClient;
use search_gateway_shared::HealthStatus;

/// Message reported when the engine answers the ping unsuccessfully.
const NOT_RESPONDING: &str = "search engine is not responding";

/// Stateless liveness probe against the search engine.
///
/// Each invocation issues a fresh ping; no history is kept between checks,
/// and there is no flap suppression or failure threshold.
#[derive(Clone)]
pub struct HealthProbe {
    engine: Arc<dyn SearchEngineClient>,
}

impl HealthProbe {
    /// Create a probe over the shared engine client.
    pub fn new(engine: Arc<dyn SearchEngineClient>) -> Self {
        Self { engine }
    }

    /// Ping the engine and map the outcome onto a health status.
    ///
    /// - Ping answered successfully: `Healthy`
    /// - Ping answered unsuccessfully: `Unhealthy` with a fixed message
    /// - Ping never reached the engine: `Unhealthy` with the fault's message
    pub async fn check(&self) -> HealthStatus {
        match self.engine.ping().await {
            Ok(true) => HealthStatus::Healthy,
            Ok(false) => HealthStatus::unhealthy(NOT_RESPONDING),
            Err(e) => HealthStatus::unhealthy(format!("search engine check failed: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;

    use search_gateway_repository::SearchError;
    use search_gateway_shared::{IndexedDocument, SearchResults};

    /// Mock engine whose ping outcome is fixed at construction.
    struct MockEngine {
        ping_result: Result<bool, SearchError>,
    }

    impl MockEngine {
        fn with_ping(ping_result: Result<bool, SearchError>) -> Arc<Self> {
            Arc::new(Self { ping_result })
        }
    }

    #[async_trait]
    impl SearchEngineClient for MockEngine {
        async fn index_document(
            &self,
            _index: &str,
            _document: &Value,
        ) -> Result<IndexedDocument, SearchError> {
            unimplemented!("not exercised by the probe")
        }

        async fn get_document(
            &self,
            _index: &str,
            _document_id: &str,
        ) -> Result<Option<Value>, SearchError> {
            unimplemented!("not exercised by the probe")
        }

        async fn search(&self, _index: &str, _query: &str) -> Result<SearchResults, SearchError> {
            unimplemented!("not exercised by the probe")
        }

        async fn ping(&self) -> Result<bool, SearchError> {
            match &self.ping_result {
                Ok(ok) => Ok(*ok),
                Err(e) => Err(SearchError::connection(e.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_healthy_when_ping_succeeds() {
        let probe = HealthProbe::new(MockEngine::with_ping(Ok(true)));

        assert_eq!(probe.check().await, HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn test_unhealthy_when_engine_answers_unsuccessfully() {
        let probe = HealthProbe::new(MockEngine::with_ping(Ok(false)));

        let status = probe.check().await;

        assert_eq!(status, HealthStatus::unhealthy(NOT_RESPONDING));
    }

    #[tokio::test]
    async fn test_unhealthy_with_fault_message_on_transport_error() {
        let probe = HealthProbe::new(MockEngine::with_ping(Err(SearchError::connection(
            "connection refused",
        ))));

        let status = probe.check().await;

        assert!(!status.is_healthy());
        match status {
            HealthStatus::Unhealthy { reason } => {
                assert!(reason.contains("connection refused"));
            }
            HealthStatus::Healthy => panic!("expected unhealthy status"),
        }
    }
}
