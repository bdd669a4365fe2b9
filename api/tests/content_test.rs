mod common;

use axum::http::StatusCode;
use common::{admin_token, bearer, test_server};
use serde_json::{Value, json};

fn new_recipe() -> Value {
    json!({
        "name": "Lentil Soup",
        "description": "Hearty red lentil soup.",
        "category": "dinner",
        "cuisine": "turkish",
        "difficulty": "easy",
        "prep_time_minutes": 10,
        "cook_time_minutes": 25,
        "servings": 4,
        "ingredients": [
            { "name": "red lentils", "quantity": 250.0, "unit": "g" },
            { "name": "onion", "quantity": 1.0, "unit": "piece" }
        ],
        "instructions": ["Saute the onion.", "Simmer the lentils for 20 minutes."],
        "nutrition": { "calories": 280.0, "protein": 16.0, "carbs": 42.0, "fat": 4.0 },
        "tags": ["vegan"]
    })
}

#[tokio::test]
async fn recipes_are_listed_publicly() {
    let server = test_server();

    let response = server.get("/recipes").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().expect("list").len(), 3);
}

#[tokio::test]
async fn recipes_can_be_filtered_and_sorted() {
    let server = test_server();

    let response = server
        .get("/recipes")
        .add_query_param("filter[difficulty]", "easy")
        .add_query_param("sort", "-calories")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|r| r["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Salmon with Roasted Broccoli", "Overnight Oats"]);
}

#[tokio::test]
async fn unknown_filter_field_is_a_bad_request() {
    let server = test_server();

    let response = server
        .get("/recipes")
        .add_query_param("filter[password]", "x")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn writes_require_an_admin_token() {
    let server = test_server();

    let response = server.post("/recipes").json(&new_recipe()).await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = bearer("not-a-jwt");
    let response = server
        .post("/recipes")
        .add_header(name, value)
        .json(&new_recipe())
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let server = test_server();

    let response = server
        .post("/admin/login")
        .json(&json!({ "username": common::ADMIN_USERNAME, "password": "guess" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_manages_recipe_lifecycle() {
    let server = test_server();
    let token = admin_token(&server).await;

    let (name, value) = bearer(&token);
    let created = server
        .post("/recipes")
        .add_header(name, value)
        .json(&new_recipe())
        .await;
    created.assert_status(StatusCode::CREATED);
    let created: Value = created.json();
    let id = created["data"]["id"].as_str().expect("id").to_string();

    server
        .get(&format!("/recipes/{}", id))
        .await
        .assert_status_ok();

    let (name, value) = bearer(&token);
    let updated = server
        .put(&format!("/recipes/{}", id))
        .add_header(name, value)
        .json(&json!({ "servings": 6 }))
        .await;
    updated.assert_status_ok();
    let updated: Value = updated.json();
    assert_eq!(updated["data"]["servings"], 6);
    assert_eq!(updated["data"]["name"], "Lentil Soup");

    let (name, value) = bearer(&token);
    server
        .delete(&format!("/recipes/{}", id))
        .add_header(name, value)
        .await
        .assert_status_ok();

    server
        .get(&format!("/recipes/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_recipe_payload_is_unprocessable() {
    let server = test_server();
    let token = admin_token(&server).await;

    let mut recipe = new_recipe();
    recipe["servings"] = json!(0);
    recipe["ingredients"] = json!([]);

    let (name, value) = bearer(&token);
    let response = server
        .post("/recipes")
        .add_header(name, value)
        .json(&recipe)
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn workouts_are_listed_and_fetched() {
    let server = test_server();

    let list: Value = server.get("/workouts").await.json();
    let first = &list["data"][0];
    let id = first["id"].as_str().expect("id");

    let response = server.get(&format!("/workouts/{}", id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], first["name"]);
}

#[tokio::test]
async fn malformed_id_is_rejected() {
    let server = test_server();

    let response = server.get("/workouts/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_creates_food() {
    let server = test_server();
    let token = admin_token(&server).await;

    let (name, value) = bearer(&token);
    let response = server
        .post("/foods")
        .add_header(name, value)
        .json(&json!({
            "name": "Cottage Cheese",
            "category": "dairy",
            "serving_size": "113g",
            "calories": 98.0,
            "protein": 11.0,
            "carbs": 3.4,
            "fat": 4.3
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let foods: Value = server.get("/foods").add_query_param("limit", "100").await.json();
    assert_eq!(foods["data"].as_array().expect("list").len(), 6);
}

#[tokio::test]
async fn food_search_falls_back_to_local_data() {
    let server = test_server();

    let stored: Value = server
        .get("/foods/search")
        .add_query_param("q", "oats")
        .await
        .json();
    assert_eq!(stored["data"]["source"], "local");
    assert_eq!(stored["data"]["foods"][0]["name"], "Rolled Oats");

    let table: Value = server
        .get("/foods/search")
        .add_query_param("q", "apple")
        .await
        .json();
    assert_eq!(table["data"]["source"], "local");
    assert_eq!(table["data"]["foods"][0]["calories"], 95.0);
}

#[tokio::test]
async fn empty_food_search_is_a_bad_request() {
    let server = test_server();

    let response = server.get("/foods/search").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_overview_requires_token() {
    let server = test_server();

    server
        .get("/admin/overview")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let token = admin_token(&server).await;
    let (name, value) = bearer(&token);
    let response = server.get("/admin/overview").add_header(name, value).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["stores"]["recipes"], 3);
}
