#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use axum_test::TestServer;
use clap::Parser;
use fitpulse_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};

pub const ADMIN_USERNAME: &str = "coach";
pub const ADMIN_PASSWORD: &str = "correct horse battery";
pub const DEVICE_ID: &str = "device-under-test";

/// Every provider key is passed blank so the environment cannot configure one.
pub fn test_args(root_path: &str) -> Args {
    Args::parse_from([
        "fitpulse-api",
        "--server-root-path",
        root_path,
        "--vision-api-key",
        "",
        "--fatsecret-consumer-key",
        "",
        "--fatsecret-consumer-secret",
        "",
        "--usda-api-key",
        "",
        "--nutritionix-app-id",
        "",
        "--nutritionix-app-key",
        "",
        "--admin-username",
        ADMIN_USERNAME,
        "--admin-password",
        ADMIN_PASSWORD,
        "--admin-jwt-secret",
        "integration-test-signing-secret",
    ])
}

pub fn test_server_at(root_path: &str) -> TestServer {
    let app_state = state(Arc::new(test_args(root_path))).expect("state builds");
    let app = router(app_state).expect("router builds");
    TestServer::new(app).expect("test server starts")
}

pub fn test_server() -> TestServer {
    test_server_at("")
}

pub async fn admin_token(server: &TestServer) -> String {
    let response = server
        .post("/admin/login")
        .json(&json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["data"]["token"]
        .as_str()
        .expect("login returns a token")
        .to_string()
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header"),
    )
}

pub fn device_header(device_id: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-device-id"),
        HeaderValue::from_str(device_id).expect("valid header"),
    )
}
