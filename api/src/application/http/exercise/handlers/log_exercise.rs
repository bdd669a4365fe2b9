use crate::application::device_middleware::DeviceContext;
use crate::application::http::exercise::validators::LogExerciseValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::{Extension, extract::State};
use fitpulse_core::domain::exercise::entities::ExerciseLog;
use fitpulse_core::domain::exercise::ports::ExerciseService;
use fitpulse_core::domain::exercise::value_objects::LogExerciseInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogExerciseResponse {
    pub data: ExerciseLog,
}

#[utoipa::path(
    post,
    path = "/logs",
    tag = "exercise",
    summary = "Log exercise",
    description = "Stores an exercise for the calling device. Calories are estimated when not provided.",
    params(
        ("X-Device-Id" = String, Header, description = "Device identifier"),
    ),
    responses(
        (status = 201, body = LogExerciseResponse),
        (status = 400, description = "Missing X-Device-Id header")
    ),
    request_body = LogExerciseValidator
)]
pub async fn log_exercise(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<LogExerciseValidator>,
) -> Result<Response<LogExerciseResponse>, ApiError> {
    let log = state
        .service
        .log_exercise(
            device.device_id,
            LogExerciseInput {
                exercise_name: payload.exercise_name,
                duration_minutes: payload.duration_minutes,
                calories_burned: payload.calories_burned,
                weight_kg: payload.weight_kg,
                notes: payload.notes,
                logged_at: payload.logged_at,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(LogExerciseResponse { data: log }))
}
