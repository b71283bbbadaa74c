//! API request and response types.

use serde::{Deserialize, Serialize};

/// Liveness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is alive
    pub status: &'static str,

    /// Current UTC time, ISO 8601
    pub timestamp: String,

    /// Configured application version
    pub version: String,
}

/// Readiness probe response.
#[derive(Debug, Clone, Serialize)]
pub struct ReadyResponse {
    /// Always true once server assembly has completed
    pub ready: bool,
}

/// Build/version metadata for deployment infrastructure.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    /// Agent name
    pub name: String,

    /// Configured application version
    pub version: String,

    /// Deployment environment label
    pub environment: String,
}

/// A function-call dispatch request for the registered agent.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallRequest {
    /// Name of the tool to invoke
    pub function: String,
}

/// The text payload a dispatched tool produced.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCallResponse {
    pub response: String,
}

/// Error body for failed dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
