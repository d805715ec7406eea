//! HTTP-level integration tests for the `/users` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, TestContext};
use serde_json::json;

#[tokio::test]
async fn create_user_returns_201_without_email() {
    let ctx = TestContext::seeded().await;
    let response = post_json(
        ctx.app(),
        "/users",
        json!({"name": "John Doe", "email": "john@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json, json!({"id": 1, "name": "John Doe"}));

    // The address is still persisted, just never returned.
    let stored = std::fs::read_to_string(&ctx.config.users_file).unwrap();
    assert!(stored.contains("john@example.com"));
}

#[tokio::test]
async fn list_and_get_hide_email() {
    let ctx = TestContext::seeded().await;
    post_json(
        ctx.app(),
        "/users",
        json!({"name": "Ada", "email": "ada@example.com"}),
    )
    .await;

    let list = body_json(get(ctx.app(), "/users").await).await;
    assert_eq!(list, json!([{"id": 1, "name": "Ada"}]));

    let one = body_json(get(ctx.app(), "/users/1").await).await;
    assert!(one.get("email").is_none());
    assert_eq!(one["name"], "Ada");
}

#[tokio::test]
async fn invalid_user_lists_every_offending_field() {
    let ctx = TestContext::seeded().await;
    let response = post_json(ctx.app(), "/users", json!({"email": "nope"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "name"]);
}

#[tokio::test]
async fn delete_user_then_404() {
    let ctx = TestContext::seeded().await;
    post_json(
        ctx.app(),
        "/users",
        json!({"name": "Temp", "email": "temp@example.com"}),
    )
    .await;

    let response = delete(ctx.app(), "/users/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Temp");

    let response = get(ctx.app(), "/users/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "User with id 1 not found");
}
