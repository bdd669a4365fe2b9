use crate::application::auth::RequiredAdmin;
use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::recipe::entities::{Recipe, RecipeConfig};
use fitpulse_core::domain::recipe::ports::RecipeService;
use fitpulse_core::domain::recipe::value_objects::CreateRecipeInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Adds a recipe to the catalogue. Requires an admin token.",
    responses(
        (status = 201, body = CreateRecipeResponse),
        (status = 401, description = "Admin token missing or invalid")
    ),
    request_body = CreateRecipeValidator
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(
            identity,
            CreateRecipeInput {
                recipe: RecipeConfig {
                    name: payload.name,
                    description: payload.description,
                    category: payload.category,
                    cuisine: payload.cuisine,
                    difficulty: payload.difficulty,
                    prep_time_minutes: payload.prep_time_minutes,
                    cook_time_minutes: payload.cook_time_minutes,
                    servings: payload.servings,
                    ingredients: payload.ingredients,
                    instructions: payload.instructions,
                    nutrition: payload.nutrition,
                    tags: payload.tags,
                    image_url: payload.image_url,
                },
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}
