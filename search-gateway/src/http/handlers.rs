//! Request handlers for the gateway endpoints.
//!
//! Each handler decodes the request, delegates to the search engine client,
//! and translates the result into an HTTP response. No recovery happens
//! here; adapter errors convert into [`ApiError`].

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::http::{ApiError, AppState};
use search_gateway_shared::{HealthStatus, SearchResults};

/// Query parameters accepted by the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw query string handed to the engine's query parser.
    pub query: String,
}

/// Acknowledgment returned by the index endpoint.
#[derive(Debug, Serialize)]
pub struct IndexAck {
    pub message: String,
    /// The engine-assigned document id.
    pub id: String,
}

/// `POST /api/elasticsearch/index` — index an arbitrary JSON document.
///
/// The body is forwarded verbatim; the engine assigns the id, which is
/// returned in the acknowledgment.
pub async fn index_document(
    Extension(state): Extension<AppState>,
    Json(document): Json<Value>,
) -> Result<Json<IndexAck>, ApiError> {
    let indexed = state.engine.index_document(&state.index, &document).await?;

    info!(doc_id = %indexed.id, "Document indexed");

    Ok(Json(IndexAck {
        message: "Document indexed successfully.".to_string(),
        id: indexed.id,
    }))
}

/// `GET /api/elasticsearch/get/{id}` — fetch a document by id.
///
/// A missing document is a 404, not an engine failure.
pub async fn get_document(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.engine.get_document(&state.index, &id).await? {
        Some(document) => Ok(Json(document)),
        None => Err(ApiError::NotFound(format!("document {} not found", id))),
    }
}

/// `GET /api/elasticsearch/search?query=…` — free-text query-string search.
pub async fn search_documents(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, ApiError> {
    let results = state.engine.search(&state.index, &params.query).await?;

    Ok(Json(results))
}

/// `GET /health` — ping the engine and report its status.
pub async fn health(Extension(state): Extension<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let status = state.probe.check().await;

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(status))
}
