use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::application::http::server::{
    api_entities::api_error::ApiError, http_server::DEVICE_ID_HEADER,
};

pub const MAX_DEVICE_ID_LENGTH: usize = 128;

/// Device context stored in request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceContext {
    pub device_id: String,
}

/// Requires the `X-Device-Id` header and stores it as a [`DeviceContext`].
pub async fn device_middleware(mut req: Request, next: Next) -> Response {
    let device_id = req
        .headers()
        .get(DEVICE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    if device_id.is_empty() {
        return ApiError::BadRequest("Missing X-Device-Id header".to_string()).into_response();
    }
    if device_id.len() > MAX_DEVICE_ID_LENGTH {
        return ApiError::BadRequest(format!(
            "X-Device-Id must be at most {} characters",
            MAX_DEVICE_ID_LENGTH
        ))
        .into_response();
    }

    req.extensions_mut().insert(DeviceContext { device_id });
    next.run(req).await
}
