use crate::application::auth::RequiredAdmin;
use crate::application::http::recipe::validators::UpdateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fitpulse_core::domain::recipe::entities::Recipe;
use fitpulse_core::domain::recipe::ports::RecipeService;
use fitpulse_core::domain::recipe::value_objects::UpdateRecipeInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Partially updates a recipe; omitted fields are left unchanged. Requires an admin token.",
    responses(
        (status = 200, body = UpdateRecipeResponse),
        (status = 404, description = "Recipe not found")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = UpdateRecipeValidator
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(
            identity,
            UpdateRecipeInput {
                recipe_id,
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
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: recipe }))
}
