//! Health status reported by the engine probe.

use serde::{Deserialize, Serialize};

/// Health of the search engine connection as seen by a single probe.
///
/// The status is recomputed on every probe invocation; nothing is persisted
/// between checks. An unhealthy status carries the reason, which is either a
/// fixed not-responding message or the underlying transport fault's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthStatus {
    /// The engine answered the ping successfully.
    Healthy,
    /// The engine did not answer, or answered unsuccessfully.
    Unhealthy { reason: String },
}

impl HealthStatus {
    /// Create an unhealthy status with the given reason.
    pub fn unhealthy(reason: impl Into<String>) -> Self {
        Self::Unhealthy {
            reason: reason.into(),
        }
    }

    /// Whether the status is healthy.
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}
