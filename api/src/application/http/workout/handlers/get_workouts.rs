use crate::application::http::query_params::{ListQueryExtractor, ListQueryParams};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::workout::entities::Workout;
use fitpulse_core::domain::workout::ports::WorkoutService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWorkoutsResponse {
    pub data: Vec<Workout>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "workout",
    summary = "Get workouts",
    params(ListQueryParams),
    responses(
        (status = 200, body = GetWorkoutsResponse)
    ),
)]
pub async fn get_workouts(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<GetWorkoutsResponse>, ApiError> {
    let workouts = state
        .service
        .get_workouts(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWorkoutsResponse { data: workouts }))
}
