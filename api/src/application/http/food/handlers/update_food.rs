use crate::application::auth::RequiredAdmin;
use crate::application::http::food::validators::UpdateFoodValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fitpulse_core::domain::food::entities::Food;
use fitpulse_core::domain::food::ports::FoodService;
use fitpulse_core::domain::food::value_objects::UpdateFoodInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateFoodResponse {
    pub data: Food,
}

#[utoipa::path(
    put,
    path = "/{food_id}",
    tag = "food",
    summary = "Update food",
    description = "Partially updates a food. Requires an admin token.",
    responses(
        (status = 200, body = UpdateFoodResponse),
        (status = 404, description = "Food not found")
    ),
    params(
        ("food_id" = Uuid, Path, description = "Food ID"),
    ),
    request_body = UpdateFoodValidator
)]
pub async fn update_food(
    Path(food_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
    ValidateJson(payload): ValidateJson<UpdateFoodValidator>,
) -> Result<Response<UpdateFoodResponse>, ApiError> {
    let food = state
        .service
        .update_food(
            identity,
            UpdateFoodInput {
                food_id,
                name: payload.name,
                brand: payload.brand,
                category: payload.category,
                serving_size: payload.serving_size,
                calories: payload.calories,
                protein: payload.protein,
                carbs: payload.carbs,
                fat: payload.fat,
                fiber: payload.fiber,
                sugar: payload.sugar,
                sodium: payload.sodium,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateFoodResponse { data: food }))
}
