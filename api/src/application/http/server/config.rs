use axum::extract::State;
use fitpulse_core::domain::health::{entities::ProviderStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_version: String,
    pub root_path: String,
    pub providers: Vec<ProviderStatus>,
}

/// Public runtime configuration. Only reports whether each provider is configured.
#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get runtime configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Result<Response<ConfigResponse>, ApiError> {
    let report = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        providers: report.providers,
    }))
}
