//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    GetParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::queries;
use search_gateway_shared::{IndexedDocument, SearchHit, SearchResults};

/// OpenSearch client implementation.
///
/// Wraps a single long-lived SDK client over a single-node connection pool.
/// Every trait operation validates the engine's response status and converts
/// failures into a [`SearchError`] carrying the engine's debug text.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchClient::new("http://localhost:9200", None)?;
/// let indexed = client.index_document("my-index", &json!({"title": "hello"})).await?;
/// let doc = client.get_document("my-index", &indexed.id).await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The cluster URL (e.g. "http://localhost:9200")
    /// * `credentials` - Optional basic-auth username/password pair
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError::ConnectionError)` - If transport setup fails
    pub fn new(
        url: &str,
        credentials: Option<(String, String)>,
    ) -> Result<Self, SearchError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();
        if let Some((username, password)) = credentials {
            builder = builder.auth(Credentials::Basic(username, password));
        }
        let transport = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created search engine client");

        Ok(Self { client })
    }

    /// Access the underlying SDK client.
    ///
    /// Bypasses the response validation performed by the trait operations;
    /// callers using the raw handle are responsible for checking responses
    /// themselves.
    pub fn raw(&self) -> &OpenSearch {
        &self.client
    }

    /// Extract the assigned id and result word from an index response body.
    fn parse_index_response(body: &Value) -> Result<IndexedDocument, SearchError> {
        let id = body
            .get("_id")
            .and_then(Value::as_str)
            .ok_or_else(|| SearchError::parse("index response missing _id"))?;
        let result = body
            .get("result")
            .and_then(Value::as_str)
            .unwrap_or("created");

        Ok(IndexedDocument {
            id: id.to_string(),
            result: result.to_string(),
        })
    }

    /// Extract the stored payload from a get response body.
    ///
    /// Returns `None` when the engine reports `found: false`. A found
    /// document with source storage disabled yields `Some(Value::Null)`.
    fn parse_get_response(body: &Value) -> Option<Value> {
        if body.get("found").and_then(Value::as_bool).unwrap_or(false) {
            Some(body.get("_source").cloned().unwrap_or(Value::Null))
        } else {
            None
        }
    }

    /// Parse a full search response body into [`SearchResults`].
    fn parse_search_response(body: &Value) -> Result<SearchResults, SearchError> {
        let hits_obj = body
            .get("hits")
            .ok_or_else(|| SearchError::parse("search response missing hits"))?;

        let total = hits_obj
            .pointer("/total/value")
            .and_then(Value::as_u64)
            .unwrap_or(0);

        let hits = hits_obj
            .get("hits")
            .and_then(Value::as_array)
            .map(|hits| hits.iter().filter_map(Self::parse_hit).collect())
            .unwrap_or_default();

        Ok(SearchResults { total, hits })
    }

    /// Parse a single hit. Hits without an `_id` are skipped.
    fn parse_hit(hit: &Value) -> Option<SearchHit> {
        let id = hit.get("_id")?.as_str()?.to_string();
        let score = hit.get("_score").and_then(Value::as_f64);
        let document = hit.get("_source").cloned().unwrap_or(Value::Null);

        Some(SearchHit {
            id,
            score,
            document,
        })
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    #[instrument(skip(self, document))]
    async fn index_document(
        &self,
        index: &str,
        document: &Value,
    ) -> Result<IndexedDocument, SearchError> {
        if index.is_empty() {
            return Err(SearchError::invalid_query("index name must not be empty"));
        }

        let response = self
            .client
            .index(IndexParts::Index(index))
            .body(document)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let indexed = Self::parse_index_response(&body)?;

        debug!(doc_id = %indexed.id, index = %index, "Document indexed");
        Ok(indexed)
    }

    async fn get_document(
        &self,
        index: &str,
        document_id: &str,
    ) -> Result<Option<Value>, SearchError> {
        if index.is_empty() || document_id.is_empty() {
            return Err(SearchError::invalid_query(
                "index name and document id must not be empty",
            ));
        }

        let response = self
            .client
            .get(GetParts::IndexId(index, document_id))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();

        // 404 means the document does not exist; only other failure statuses
        // count as query errors
        if status.as_u16() == 404 {
            debug!(doc_id = %document_id, index = %index, "Document not found");
            return Ok(None);
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Get request failed");
            return Err(SearchError::query(format!(
                "Get failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        Ok(Self::parse_get_response(&body))
    }

    #[instrument(skip(self))]
    async fn search(&self, index: &str, query: &str) -> Result<SearchResults, SearchError> {
        if index.is_empty() {
            return Err(SearchError::invalid_query("index name must not be empty"));
        }
        if query.trim().is_empty() {
            return Err(SearchError::invalid_query("query string must not be empty"));
        }

        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(queries::build_query_string_query(query))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let results = Self::parse_search_response(&body)?;

        debug!(total = results.total, index = %index, "Search completed");
        Ok(results)
    }

    async fn ping(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        Ok(response.status_code().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = OpenSearchClient::new("not a url", None);

        assert!(matches!(result, Err(SearchError::ConnectionError(_))));
    }

    #[test]
    fn test_new_with_credentials() {
        let result = OpenSearchClient::new(
            "http://localhost:9200",
            Some(("admin".to_string(), "secret".to_string())),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_index_response() {
        let body = json!({
            "_index": "my-index",
            "_id": "pGd9z4kBv2mK",
            "result": "created"
        });

        let indexed = OpenSearchClient::parse_index_response(&body).unwrap();

        assert_eq!(indexed.id, "pGd9z4kBv2mK");
        assert_eq!(indexed.result, "created");
    }

    #[test]
    fn test_parse_index_response_missing_id() {
        let body = json!({ "result": "created" });

        let result = OpenSearchClient::parse_index_response(&body);

        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_parse_get_response_found() {
        let body = json!({
            "_id": "doc-1",
            "found": true,
            "_source": { "title": "hello" }
        });

        let document = OpenSearchClient::parse_get_response(&body).unwrap();

        assert_eq!(document["title"], "hello");
    }

    #[test]
    fn test_parse_get_response_not_found() {
        let body = json!({ "_id": "doc-1", "found": false });

        assert!(OpenSearchClient::parse_get_response(&body).is_none());
    }

    #[test]
    fn test_parse_get_response_found_without_source() {
        let body = json!({ "_id": "doc-1", "found": true });

        let document = OpenSearchClient::parse_get_response(&body).unwrap();

        assert!(document.is_null());
    }

    #[test]
    fn test_parse_hit() {
        let id = Uuid::new_v4().to_string();
        let hit = json!({
            "_id": id,
            "_score": 1.5,
            "_source": { "title": "hello" }
        });

        let parsed = OpenSearchClient::parse_hit(&hit).unwrap();

        assert_eq!(parsed.id, id);
        assert_eq!(parsed.score, Some(1.5));
        assert_eq!(parsed.document["title"], "hello");
    }

    #[test]
    fn test_parse_hit_without_id() {
        let hit = json!({ "_score": 1.0, "_source": {} });

        assert!(OpenSearchClient::parse_hit(&hit).is_none());
    }

    #[test]
    fn test_parse_search_response() {
        let body = json!({
            "took": 3,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_id": "a", "_score": 2.0, "_source": { "title": "first" } },
                    { "_id": "b", "_score": 1.0, "_source": { "title": "second" } }
                ]
            }
        });

        let results = OpenSearchClient::parse_search_response(&body).unwrap();

        assert_eq!(results.total, 2);
        assert_eq!(results.hits.len(), 2);
        assert_eq!(results.hits[0].id, "a");
        assert_eq!(results.hits[1].document["title"], "second");
    }

    #[test]
    fn test_parse_search_response_empty() {
        let body = json!({
            "hits": {
                "total": { "value": 0, "relation": "eq" },
                "hits": []
            }
        });

        let results = OpenSearchClient::parse_search_response(&body).unwrap();

        assert_eq!(results.total, 0);
        assert!(results.hits.is_empty());
    }

    #[test]
    fn test_parse_search_response_missing_hits() {
        let body = json!({ "error": "oops" });

        let result = OpenSearchClient::parse_search_response(&body);

        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let client = OpenSearchClient::new("http://localhost:9200", None).unwrap();

        let result = client.search("my-index", "   ").await;

        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_index_rejects_empty_index_name() {
        let client = OpenSearchClient::new("http://localhost:9200", None).unwrap();

        let result = client.index_document("", &json!({"title": "hello"})).await;

        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_get_rejects_empty_document_id() {
        let client = OpenSearchClient::new("http://localhost:9200", None).unwrap();

        let result = client.get_document("my-index", "").await;

        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }
}
