use super::handlers::delete_exercise_log::{__path_delete_exercise_log, delete_exercise_log};
use super::handlers::estimate_exercise::{__path_estimate_exercise, estimate_exercise};
use super::handlers::get_exercise_logs::{__path_get_exercise_logs, get_exercise_logs};
use super::handlers::log_exercise::{__path_log_exercise, log_exercise};
use crate::application::{
    device_middleware::device_middleware, http::server::app_state::AppState,
};

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(estimate_exercise, log_exercise, get_exercise_logs, delete_exercise_log))]
pub struct ExerciseApiDoc;

pub fn exercise_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let device_routes = Router::new()
        .route(
            &format!("{}/exercises/logs", root_path),
            get(get_exercise_logs).post(log_exercise),
        )
        .route(
            &format!("{}/exercises/logs/{{log_id}}", root_path),
            delete(delete_exercise_log),
        )
        .layer(middleware::from_fn(device_middleware));

    Router::new()
        .route(
            &format!("{}/exercises/estimate", root_path),
            post(estimate_exercise),
        )
        .merge(device_routes)
}
