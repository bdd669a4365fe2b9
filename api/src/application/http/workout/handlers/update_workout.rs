use crate::application::auth::RequiredAdmin;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::workout::validators::UpdateWorkoutValidator;
use axum::extract::{Path, State};
use fitpulse_core::domain::workout::entities::Workout;
use fitpulse_core::domain::workout::ports::WorkoutService;
use fitpulse_core::domain::workout::value_objects::UpdateWorkoutInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateWorkoutResponse {
    pub data: Workout,
}

#[utoipa::path(
    put,
    path = "/{workout_id}",
    tag = "workout",
    summary = "Update workout",
    description = "Partially updates a workout. Requires an admin token.",
    responses(
        (status = 200, body = UpdateWorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    params(
        ("workout_id" = Uuid, Path, description = "Workout ID"),
    ),
    request_body = UpdateWorkoutValidator
)]
pub async fn update_workout(
    Path(workout_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
    ValidateJson(payload): ValidateJson<UpdateWorkoutValidator>,
) -> Result<Response<UpdateWorkoutResponse>, ApiError> {
    let workout = state
        .service
        .update_workout(
            identity,
            UpdateWorkoutInput {
                workout_id,
                name: payload.name,
                description: payload.description,
                category: payload.category,
                difficulty: payload.difficulty,
                duration_minutes: payload.duration_minutes,
                calories_burned: payload.calories_burned,
                equipment: payload.equipment,
                exercises: payload.exercises,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateWorkoutResponse { data: workout }))
}
