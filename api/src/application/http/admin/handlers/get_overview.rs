use crate::application::auth::RequiredAdmin;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use fitpulse_core::domain::admin::ports::AdminService;
use fitpulse_core::domain::health::entities::ReadinessReport;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AdminOverviewResponse {
    pub data: ReadinessReport,
}

#[utoipa::path(
    get,
    path = "/overview",
    tag = "admin",
    summary = "Admin overview",
    description = "Store sizes and provider configuration for the admin console.",
    responses(
        (status = 200, body = AdminOverviewResponse),
        (status = 401, description = "Admin token missing or invalid")
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    admin: RequiredAdmin,
) -> Result<Response<AdminOverviewResponse>, ApiError> {
    if let Some(claims) = admin.claims() {
        info!(subject = %claims.sub, "admin overview requested");
    }

    let RequiredAdmin(identity) = admin;
    let report = state
        .service
        .get_overview(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AdminOverviewResponse { data: report }))
}
