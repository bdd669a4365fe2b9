mod common;

use axum::http::StatusCode;
use common::{test_server, test_server_at};
use serde_json::Value;

#[tokio::test]
async fn live_is_always_ok() {
    let server = test_server();

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_reports_seeded_stores_and_unconfigured_providers() {
    let server = test_server();

    let response = server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["stores"]["recipes"], 3);
    assert_eq!(body["data"]["stores"]["workouts"], 3);
    assert_eq!(body["data"]["stores"]["foods"], 5);
    assert_eq!(body["data"]["stores"]["exercise_logs"], 0);

    let providers = body["data"]["providers"].as_array().expect("providers list");
    assert_eq!(providers.len(), 4);
    assert!(providers.iter().all(|p| p["configured"] == false));
}

#[tokio::test]
async fn config_lists_providers_without_secrets() {
    let server = test_server();

    let response = server.get("/config").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("\"providers\""));
    assert!(!text.contains("integration-test-signing-secret"));
    assert!(!text.contains(common::ADMIN_PASSWORD));
}

#[tokio::test]
async fn routes_are_mounted_under_root_path() {
    let server = test_server_at("/api");

    server.get("/api/health/live").await.assert_status_ok();
    server
        .get("/health/live")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = test_server();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/food-recognition"].is_object());
    assert!(body["paths"]["/foods/search"].is_object());
}
