use crate::application::auth::RequiredAdmin;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fitpulse_core::domain::workout::ports::WorkoutService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteWorkoutResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{workout_id}",
    tag = "workout",
    summary = "Delete workout",
    responses(
        (status = 200, body = DeleteWorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    params(
        ("workout_id" = Uuid, Path, description = "Workout ID"),
    ),
)]
pub async fn delete_workout(
    Path(workout_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
) -> Result<Response<DeleteWorkoutResponse>, ApiError> {
    state
        .service
        .delete_workout(identity, workout_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteWorkoutResponse {
        message: "Workout deleted successfully".to_string(),
    }))
}
