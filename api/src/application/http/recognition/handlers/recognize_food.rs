use axum::extract::{Multipart, State};
use fitpulse_core::domain::recognition::{
    entities::RecognitionOutcome, ports::FoodRecognitionService,
    value_objects::RecognizeFoodInput,
};
use tracing::debug;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const IMAGE_FIELD: &str = "image";

#[utoipa::path(
    post,
    path = "",
    tag = "food-recognition",
    summary = "Recognize food from image",
    description = "Detects foods in an uploaded image and estimates portions, calories and nutrition. \
                   When no vision provider is usable a demo record (`recognized_food`) is returned instead.",
    request_body(content_type = "multipart/form-data", description = "Multipart form with an `image` file field"),
    responses(
        (status = 200, body = RecognitionOutcome),
        (status = 400, description = "Missing, empty or oversized image")
    ),
)]
pub async fn recognize_food(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<RecognitionOutcome>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image_data = Some(data.to_vec());
    }

    let image_data = image_data
        .filter(|data| !data.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No image file provided".to_string()))?;

    debug!(bytes = image_data.len(), "received image for recognition");

    let outcome = state
        .service
        .recognize_food(RecognizeFoodInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
