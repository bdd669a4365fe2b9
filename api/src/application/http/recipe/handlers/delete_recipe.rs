use crate::application::auth::RequiredAdmin;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use fitpulse_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Removes a recipe from the catalogue. Requires an admin token.",
    responses(
        (status = 200, body = DeleteRecipeResponse),
        (status = 404, description = "Recipe not found")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredAdmin(identity): RequiredAdmin,
) -> Result<Response<DeleteRecipeResponse>, ApiError> {
    state
        .service
        .delete_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRecipeResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}
