use crate::application::device_middleware::DeviceContext;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::{
    Extension,
    extract::{Path, State},
};
use fitpulse_core::domain::exercise::ports::ExerciseService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteExerciseLogResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/logs/{log_id}",
    tag = "exercise",
    summary = "Delete exercise log",
    description = "Deletes one of the calling device's logs. Logs of other devices are reported as not found.",
    params(
        ("log_id" = Uuid, Path, description = "Exercise log ID"),
        ("X-Device-Id" = String, Header, description = "Device identifier"),
    ),
    responses(
        (status = 200, body = DeleteExerciseLogResponse),
        (status = 404, description = "Log not found")
    ),
)]
pub async fn delete_exercise_log(
    Path(log_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<DeleteExerciseLogResponse>, ApiError> {
    state
        .service
        .delete_exercise_log(device.device_id, log_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteExerciseLogResponse {
        message: "Exercise log deleted successfully".to_string(),
    }))
}
