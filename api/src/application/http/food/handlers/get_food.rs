use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fitpulse_core::domain::food::entities::Food;
use fitpulse_core::domain::food::ports::FoodService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodResponse {
    pub data: Food,
}

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "food",
    summary = "Get food",
    responses(
        (status = 200, body = GetFoodResponse),
        (status = 404, description = "Food not found")
    ),
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
)]
pub async fn get_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodResponse>, ApiError> {
    let food = state
        .service
        .get_food(food_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodResponse { data: food }))
}
