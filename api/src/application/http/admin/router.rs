use super::handlers::get_overview::{__path_get_overview, get_overview};
use super::handlers::login::{__path_login, login};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(login, get_overview))]
pub struct AdminApiDoc;

pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/admin/login", state.args.server.root_path),
            post(login),
        )
        .route(
            &format!("{}/admin/overview", state.args.server.root_path),
            get(get_overview),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
