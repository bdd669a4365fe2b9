use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use fitpulse_core::domain::admin::{
    ports::AdminService,
    value_objects::{AdminClaims, Identity},
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    Some(bearer.token().to_string())
}

/// Optional admin authentication.
/// - A valid bearer token inserts `Identity::Admin`
/// - Anything else inserts `Identity::Anonymous` and the request continues
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let identity = match extract_token_from_bearer(&mut parts).await {
        Some(token) if !token.is_empty() => match state.service.authorize_token(token).await {
            Ok(identity) => identity,
            Err(e) => {
                debug!("ignoring bearer token: {}", e);
                Identity::Anonymous
            }
        },
        _ => Identity::Anonymous,
    };

    parts.extensions.insert(identity);
    next.run(Request::from_parts(parts, body)).await
}

/// Extractor for routes reserved to the admin console. Rejects with 401.
pub struct RequiredAdmin(pub Identity);

impl RequiredAdmin {
    pub fn claims(&self) -> Option<&AdminClaims> {
        match &self.0 {
            Identity::Admin(claims) => Some(claims),
            Identity::Anonymous => None,
        }
    }
}

impl<S> FromRequestParts<S> for RequiredAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Identity>() {
            Some(identity @ Identity::Admin(_)) => Ok(RequiredAdmin(identity.clone())),
            _ => Err(ApiError::Unauthorized(
                "Authentication required: provide an admin bearer token".to_string(),
            )),
        }
    }
}
