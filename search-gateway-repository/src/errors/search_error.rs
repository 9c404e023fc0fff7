//! Search error types.
//!
//! This module defines the error types that can occur during search engine
//! operations.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failed to reach the search engine (network, DNS, timeout).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The engine answered but marked a get or search unsuccessful.
    /// Carries the engine's status and response body as debug text.
    #[error("Query error: {0}")]
    QueryError(String),

    /// The engine answered but marked an index operation unsuccessful.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Failed to interpret a response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The request was rejected before reaching the engine.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an invalid query error.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}
