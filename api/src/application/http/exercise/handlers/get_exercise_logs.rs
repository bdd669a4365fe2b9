use crate::application::device_middleware::DeviceContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::{Extension, extract::State};
use fitpulse_core::domain::exercise::entities::ExerciseLog;
use fitpulse_core::domain::exercise::ports::ExerciseService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetExerciseLogsResponse {
    pub data: Vec<ExerciseLog>,
    pub total_calories: f64,
}

#[utoipa::path(
    get,
    path = "/logs",
    tag = "exercise",
    summary = "Get exercise logs",
    description = "Lists the calling device's logs, newest first.",
    params(
        ("X-Device-Id" = String, Header, description = "Device identifier"),
    ),
    responses(
        (status = 200, body = GetExerciseLogsResponse)
    ),
)]
pub async fn get_exercise_logs(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<GetExerciseLogsResponse>, ApiError> {
    let logs = state
        .service
        .get_exercise_logs(device.device_id)
        .await
        .map_err(ApiError::from)?;

    let total_calories = logs.iter().map(|log| log.calories_burned).sum();

    Ok(Response::OK(GetExerciseLogsResponse {
        data: logs,
        total_calories,
    }))
}
