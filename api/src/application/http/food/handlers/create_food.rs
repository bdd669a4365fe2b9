use crate::application::auth::RequiredAdmin;
use crate::application::http::food::validators::CreateFoodValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::food::entities::{Food, FoodConfig};
use fitpulse_core::domain::food::ports::FoodService;
use fitpulse_core::domain::food::value_objects::CreateFoodInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateFoodResponse {
    pub data: Food,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food",
    summary = "Create food",
    description = "Adds a food to the catalogue. Nutrition values are per serving. Requires an admin token.",
    responses(
        (status = 201, body = CreateFoodResponse),
        (status = 401, description = "Admin token missing or invalid")
    ),
    request_body = CreateFoodValidator
)]
pub async fn create_food(
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
    ValidateJson(payload): ValidateJson<CreateFoodValidator>,
) -> Result<Response<CreateFoodResponse>, ApiError> {
    let food = state
        .service
        .create_food(
            identity,
            CreateFoodInput {
                food: FoodConfig {
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
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateFoodResponse { data: food }))
}
