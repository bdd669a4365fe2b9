use crate::application::http::food::validators::SearchFoodsQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use fitpulse_core::domain::food::entities::FoodSearchResult;
use fitpulse_core::domain::food::ports::FoodService;
use fitpulse_core::domain::food::value_objects::SearchFoodsInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchFoodsResponse {
    pub data: FoodSearchResult,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "food",
    summary = "Search foods",
    description = "Searches FatSecret, then USDA, then the local catalogue and nutrition table. \
                   Unconfigured providers are skipped; `source` tells which one answered.",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = SearchFoodsResponse),
        (status = 400, description = "Empty query")
    ),
)]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchFoodsQuery>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let result = state
        .service
        .search_foods(SearchFoodsInput {
            query: query.q,
            limit: query.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchFoodsResponse { data: result }))
}
