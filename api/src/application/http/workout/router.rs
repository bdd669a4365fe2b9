use super::handlers::create_workout::{__path_create_workout, create_workout};
use super::handlers::delete_workout::{__path_delete_workout, delete_workout};
use super::handlers::get_workout::{__path_get_workout, get_workout};
use super::handlers::get_workouts::{__path_get_workouts, get_workouts};
use super::handlers::update_workout::{__path_update_workout, update_workout};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_workouts, get_workout, create_workout, update_workout, delete_workout))]
pub struct WorkoutApiDoc;

pub fn workout_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/workouts", state.args.server.root_path),
            get(get_workouts).post(create_workout),
        )
        .route(
            &format!("{}/workouts/{{workout_id}}", state.args.server.root_path),
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
