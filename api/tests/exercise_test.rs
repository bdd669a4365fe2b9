mod common;

use axum::http::StatusCode;
use common::{DEVICE_ID, device_header, test_server};
use serde_json::{Value, json};

#[tokio::test]
async fn estimate_uses_met_table_without_provider() {
    let server = test_server();

    let response = server
        .post("/exercises/estimate")
        .json(&json!({ "query": "running 30 minutes" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["source"], "estimate");
    // 9.8 MET x 70 kg x 0.5 h
    assert_eq!(body["data"]["total_calories"], 343.0);
}

#[tokio::test]
async fn blank_estimate_query_is_unprocessable() {
    let server = test_server();

    let response = server
        .post("/exercises/estimate")
        .json(&json!({ "query": "" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn logs_require_device_header() {
    let server = test_server();

    let response = server.get("/exercises/logs").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn manual_and_estimated_logs_are_listed_newest_first() {
    let server = test_server();

    let (name, value) = device_header(DEVICE_ID);
    let manual = server
        .post("/exercises/logs")
        .add_header(name, value)
        .json(&json!({
            "exercise_name": "Morning yoga",
            "duration_minutes": 20.0,
            "calories_burned": 80.0,
            "logged_at": "2026-03-01T07:00:00Z"
        }))
        .await;
    manual.assert_status(StatusCode::CREATED);
    let manual: Value = manual.json();
    assert_eq!(manual["data"]["source"], "manual");

    let (name, value) = device_header(DEVICE_ID);
    let estimated = server
        .post("/exercises/logs")
        .add_header(name, value)
        .json(&json!({
            "exercise_name": "walking",
            "duration_minutes": 60.0,
            "weight_kg": 80.0,
            "logged_at": "2026-03-02T18:00:00Z"
        }))
        .await;
    estimated.assert_status(StatusCode::CREATED);
    let estimated: Value = estimated.json();
    assert_eq!(estimated["data"]["source"], "estimate");
    // 3.5 MET x 80 kg x 1 h
    assert_eq!(estimated["data"]["calories_burned"], 280.0);

    let (name, value) = device_header(DEVICE_ID);
    let list: Value = server
        .get("/exercises/logs")
        .add_header(name, value)
        .await
        .json();
    let names: Vec<&str> = list["data"]
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|log| log["exercise_name"].as_str())
        .collect();
    assert_eq!(names, vec!["walking", "Morning yoga"]);
    assert_eq!(list["total_calories"], 360.0);
}

#[tokio::test]
async fn devices_cannot_delete_each_others_logs() {
    let server = test_server();

    let (name, value) = device_header("owner-device");
    let created: Value = server
        .post("/exercises/logs")
        .add_header(name, value)
        .json(&json!({ "exercise_name": "rowing", "calories_burned": 150.0 }))
        .await
        .json();
    let id = created["data"]["id"].as_str().expect("id").to_string();

    let (name, value) = device_header("other-device");
    server
        .delete(&format!("/exercises/logs/{}", id))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let (name, value) = device_header("owner-device");
    server
        .delete(&format!("/exercises/logs/{}", id))
        .add_header(name, value)
        .await
        .assert_status_ok();
}
