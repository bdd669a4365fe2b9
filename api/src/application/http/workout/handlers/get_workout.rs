use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fitpulse_core::domain::workout::entities::Workout;
use fitpulse_core::domain::workout::ports::WorkoutService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWorkoutResponse {
    pub data: Workout,
}

#[utoipa::path(
    get,
    path = "/{workout_id}",
    tag = "workout",
    summary = "Get workout",
    responses(
        (status = 200, body = GetWorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    params(
        ("workout_id" = Uuid, Path, description = "Workout ID"),
    ),
)]
pub async fn get_workout(
    Path(workout_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetWorkoutResponse>, ApiError> {
    let workout = state
        .service
        .get_workout(workout_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWorkoutResponse { data: workout }))
}
