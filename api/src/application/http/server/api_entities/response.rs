use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Successful handler output, serialized as JSON.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> Response<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::OK(_) => StatusCode::OK,
            Response::Created(_) => StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match self {
            Response::OK(data) | Response::Created(data) => (status, Json(data)).into_response(),
        }
    }
}
