use crate::application::http::admin::validators::AdminLoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::admin::ports::AdminService;
use fitpulse_core::domain::admin::value_objects::{AdminLoginInput, AdminSession};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AdminLoginResponse {
    pub data: AdminSession,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "admin",
    summary = "Admin login",
    description = "Exchanges the configured admin credentials for a bearer token.",
    responses(
        (status = 200, body = AdminLoginResponse),
        (status = 401, description = "Wrong username or password")
    ),
    request_body = AdminLoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AdminLoginValidator>,
) -> Result<Response<AdminLoginResponse>, ApiError> {
    let session = state
        .service
        .login(AdminLoginInput {
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AdminLoginResponse { data: session }))
}
