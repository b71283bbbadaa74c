//! HTTP API - agent registration plus deployment probe endpoints.

mod routes;
mod types;

pub use routes::{build_router, serve, AppState};
pub use types::{
    ErrorResponse, HealthResponse, InfoResponse, ReadyResponse, ToolCallRequest, ToolCallResponse,
};
