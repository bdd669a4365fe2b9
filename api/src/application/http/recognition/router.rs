use super::handlers::recognize_food::{__path_recognize_food, MAX_IMAGE_SIZE, recognize_food};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Room for the multipart boundaries and headers around the image.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(recognize_food))]
pub struct RecognitionApiDoc;

pub fn recognition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/food-recognition", state.args.server.root_path),
            post(recognize_food),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD))
}
