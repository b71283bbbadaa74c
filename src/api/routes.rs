//! Route definitions and server assembly.
//!
//! The agent's function-call dispatch is mounted at `POST /agent`; the three
//! probe endpoints (`/health`, `/ready`, `/info`) are plain reads of
//! process-wide configuration and the system clock, so they never fail while
//! the process is alive.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::Agent;
use crate::config::Config;

use super::types::{
    ErrorResponse, HealthResponse, InfoResponse, ReadyResponse, ToolCallRequest, ToolCallResponse,
};

/// Shared application state. Read-only after startup.
pub struct AppState {
    pub config: Config,
    pub agent: Agent,
}

/// Assemble the router: agent dispatch plus the probe endpoints.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/agent", post(dispatch_tool))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/info", get(info_endpoint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and run the server until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let agent = Agent::from_config(&config);
    let state = Arc::new(AppState { config, agent });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Liveness probe.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: state.config.app_version.clone(),
    })
}

/// Readiness probe.
async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse { ready: true })
}

/// Build/version metadata.
async fn info_endpoint(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: state.config.agent_name.clone(),
        version: state.config.app_version.clone(),
        environment: state.config.environment.clone(),
    })
}

/// Dispatch a function call to the registered agent's tools.
async fn dispatch_tool(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToolCallRequest>,
) -> Result<Json<ToolCallResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.agent.call_tool(&request.function).await {
        Some(result) => Ok(Json(ToolCallResponse {
            response: result.message,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Unknown function: {}", request.function),
            }),
        )),
    }
}
