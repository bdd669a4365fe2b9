use crate::application::http::exercise::validators::EstimateExerciseValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::exercise::entities::ExerciseEstimation;
use fitpulse_core::domain::exercise::ports::ExerciseService;
use fitpulse_core::domain::exercise::value_objects::EstimateExerciseInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EstimateExerciseResponse {
    pub data: ExerciseEstimation,
}

#[utoipa::path(
    post,
    path = "/estimate",
    tag = "exercise",
    summary = "Estimate calories burned",
    description = "Asks Nutritionix when configured, otherwise estimates from the built-in MET table.",
    responses(
        (status = 200, body = EstimateExerciseResponse)
    ),
    request_body = EstimateExerciseValidator
)]
pub async fn estimate_exercise(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EstimateExerciseValidator>,
) -> Result<Response<EstimateExerciseResponse>, ApiError> {
    let estimation = state
        .service
        .estimate_exercise(EstimateExerciseInput {
            query: payload.query,
            weight_kg: payload.weight_kg,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EstimateExerciseResponse { data: estimation }))
}
