use axum::{Router, extract::State, routing::get};
use fitpulse_core::domain::health::{entities::ReadinessReport, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadyResponse {
    pub data: ReadinessReport,
    /// Time spent reaching every store
    pub duration_ms: u64,
}

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LiveResponse)
    ),
)]
pub async fn live() -> Response<LiveResponse> {
    Response::OK(LiveResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports store sizes and which external providers are configured.",
    responses(
        (status = 200, body = ReadyResponse)
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadyResponse>, ApiError> {
    let duration_ms = state.service.health().await.map_err(ApiError::from)?;
    let report = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(ReadyResponse {
        data: report,
        duration_ms,
    }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}
