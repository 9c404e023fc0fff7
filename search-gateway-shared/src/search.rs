//! Types describing the outcome of index and search operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgment for a successfully indexed document.
///
/// Documents are indexed without a caller-supplied id; the engine assigns
/// one, and this type carries it back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// The engine-assigned document id.
    pub id: String,
    /// The engine's result word for the write (e.g. "created").
    pub result: String,
}

/// A single hit returned by a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// The document id.
    pub id: String,
    /// Relevance score assigned by the engine, if any.
    pub score: Option<f64>,
    /// The stored document payload.
    pub document: Value,
}

/// The response to a query-string search: the engine's total match count
/// and the returned page of hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Total number of documents matching the query.
    pub total: u64,
    /// The hits returned for this request.
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    /// An empty result set.
    pub fn empty() -> Self {
        Self {
            total: 0,
            hits: Vec::new(),
        }
    }
}
