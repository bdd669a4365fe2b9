use crate::application::http::query_params::{ListQueryExtractor, ListQueryParams};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::food::entities::Food;
use fitpulse_core::domain::food::ports::FoodService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodsResponse {
    pub data: Vec<Food>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "Get foods",
    description = "Lists the curated food catalogue.",
    params(ListQueryParams),
    responses(
        (status = 200, body = GetFoodsResponse)
    ),
)]
pub async fn get_foods(
    State(state): State<AppState>,
    ListQueryExtractor(query): ListQueryExtractor,
) -> Result<Response<GetFoodsResponse>, ApiError> {
    let foods = state.service.get_foods(query).await.map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodsResponse { data: foods }))
}
