use crate::application::http::query_params::{ListQueryExtractor, ListQueryParams};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::recipe::entities::Recipe;
use fitpulse_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Get recipes",
    description = "Lists recipes. Filterable on name, category, cuisine, difficulty, servings, times, calories and tags.",
    params(ListQueryParams),
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_recipes(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}
