use crate::application::auth::RequiredAdmin;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::workout::validators::CreateWorkoutValidator;
use axum::extract::State;
use fitpulse_core::domain::workout::entities::{Workout, WorkoutConfig};
use fitpulse_core::domain::workout::ports::WorkoutService;
use fitpulse_core::domain::workout::value_objects::CreateWorkoutInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateWorkoutResponse {
    pub data: Workout,
}

#[utoipa::path(
    post,
    path = "",
    tag = "workout",
    summary = "Create workout",
    description = "Adds a workout plan. Requires an admin token.",
    responses(
        (status = 201, body = CreateWorkoutResponse),
        (status = 401, description = "Admin token missing or invalid")
    ),
    request_body = CreateWorkoutValidator
)]
pub async fn create_workout(
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
    ValidateJson(payload): ValidateJson<CreateWorkoutValidator>,
) -> Result<Response<CreateWorkoutResponse>, ApiError> {
    let workout = state
        .service
        .create_workout(
            identity,
            CreateWorkoutInput {
                workout: WorkoutConfig {
                    name: payload.name,
                    description: payload.description,
                    category: payload.category,
                    difficulty: payload.difficulty,
                    duration_minutes: payload.duration_minutes,
                    calories_burned: payload.calories_burned,
                    equipment: payload.equipment,
                    exercises: payload.exercises,
                },
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateWorkoutResponse { data: workout }))
}
