//! Mapping from adapter errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use search_gateway_repository::SearchError;

/// Error returned by the request handlers.
///
/// Handlers perform no recovery of their own; every adapter failure flows
/// through this single mapping.
#[derive(Debug)]
pub enum ApiError {
    /// The requested document does not exist.
    NotFound(String),
    /// The search engine client reported a failure.
    Engine(SearchError),
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        Self::Engine(err)
    }
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Engine(SearchError::InvalidQuery(_)) => StatusCode::BAD_REQUEST,
            Self::Engine(SearchError::ConnectionError(_)) => StatusCode::BAD_GATEWAY,
            Self::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::Engine(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.message() }));
        (status, body).into_response()
    }
}
