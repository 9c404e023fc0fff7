//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client, which speaks to any
//! Elasticsearch-compatible cluster.

mod client;
mod queries;

pub use client::OpenSearchClient;
