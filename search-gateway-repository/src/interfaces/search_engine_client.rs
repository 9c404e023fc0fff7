//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch,
//! mocks for testing).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use search_gateway_shared::{IndexedDocument, SearchResults};

/// Abstract interface for search engine operations.
///
/// Every operation performs one network round trip against the cluster; the
/// client holds no state between calls beyond the underlying connection pool.
/// Implementations are injected into the HTTP layer to enable testing with
/// mock backends.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`; a single client instance is
/// shared across all request tasks for the process lifetime.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Index a single document, letting the engine assign its id.
    ///
    /// # Arguments
    ///
    /// * `index` - The index the document is written to
    /// * `document` - The document payload; its shape is entirely
    ///   caller-defined and opaque to the client
    ///
    /// # Returns
    ///
    /// * `Ok(IndexedDocument)` - The engine-assigned id and result word
    /// * `Err(SearchError::IndexError)` - If the engine reports a failure
    async fn index_document(
        &self,
        index: &str,
        document: &Value,
    ) -> Result<IndexedDocument, SearchError>;

    /// Fetch a document by id.
    ///
    /// Absence is not an error: a missing document returns `Ok(None)`, while
    /// `Err(SearchError::QueryError)` is reserved for requests the engine
    /// actually failed to execute.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(document))` - The stored payload
    /// * `Ok(None)` - No document with this id exists in the index
    /// * `Err(SearchError)` - If the lookup fails
    async fn get_document(
        &self,
        index: &str,
        document_id: &str,
    ) -> Result<Option<Value>, SearchError>;

    /// Execute a free-text query-string search against the index.
    ///
    /// The query text is handed to the engine's own query parser unmodified.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResults)` - The matching hits and total count
    /// * `Err(SearchError)` - If the search fails
    async fn search(&self, index: &str, query: &str) -> Result<SearchResults, SearchError>;

    /// Check if the search engine is reachable and responding.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The engine answered the ping successfully
    /// * `Ok(false)` - The engine answered, but not successfully
    /// * `Err(SearchError::ConnectionError)` - The ping never reached the
    ///   engine (transport-level fault)
    async fn ping(&self) -> Result<bool, SearchError>;
}
