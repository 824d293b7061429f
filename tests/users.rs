mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{send, test_app};

#[tokio::test]
async fn create_then_read_roundtrip() {
    let (app, _state) = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/users",
        Some(json!({
            "username": "ilya",
            "email": "ilya@example.com",
            "password": "x"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["username"], "ilya");
    assert_eq!(created["email"], "ilya@example.com");
    assert_eq!(created["password"], "x");

    let (status, fetched) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (app, _state) = test_app().await;

    let body = json!({
        "username": "ilya",
        "email": "ilya@example.com",
        "password": "x"
    });
    let (status, _) = send(&app, "POST", "/users", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = send(
        &app,
        "POST",
        "/users",
        Some(json!({
            "username": "other",
            "email": "ilya@example.com",
            "password": "y"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], 409);
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let (app, _state) = test_app().await;

    let (status, error) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "username": "ilya", "password": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], 422);
}

#[tokio::test]
async fn wrong_field_type_is_rejected() {
    let (app, _state) = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({
            "username": 42,
            "email": "ilya@example.com",
            "password": "x"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn read_update_delete_missing_user_return_not_found() {
    let (app, _state) = test_app().await;

    let (status, _) = send(&app, "GET", "/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PUT",
        "/users/99",
        Some(json!({
            "username": "a",
            "email": "a@example.com",
            "password": "p"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (app, _state) = test_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/users",
        Some(json!({
            "username": "ilya",
            "email": "ilya@example.com",
            "password": "x"
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/users/{}", id),
        Some(json!({
            "username": "renamed",
            "email": "renamed@example.com",
            "password": "changed"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["username"], "renamed");
    assert_eq!(updated["email"], "renamed@example.com");
    assert_eq!(updated["password"], "changed");

    let (_, fetched) = send(&app, "GET", &format!("/users/{}", id), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn delete_then_read_is_not_found() {
    let (app, _state) = test_app().await;

    send(
        &app,
        "POST",
        "/users",
        Some(json!({
            "username": "ilya",
            "email": "ilya@example.com",
            "password": "x"
        })),
    )
    .await;

    let (status, confirmation) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(confirmation["message"].is_string());

    let (status, _) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let (app, _state) = test_app().await;

    let (status, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_respects_default_limit_and_skip() {
    let (app, _state) = test_app().await;

    for i in 0..12 {
        let (status, _) = send(
            &app,
            "POST",
            "/users",
            Some(json!({
                "username": format!("user{}", i),
                "email": format!("user{}@example.com", i),
                "password": "p"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // 默认 limit 为 10
    let (_, page) = send(&app, "GET", "/users", None).await;
    assert_eq!(page.as_array().unwrap().len(), 10);

    let (_, rest) = send(&app, "GET", "/users?skip=10", None).await;
    assert_eq!(rest.as_array().unwrap().len(), 2);
    assert_eq!(rest[0]["username"], "user10");

    let (_, small) = send(&app, "GET", "/users?skip=0&limit=3", None).await;
    assert_eq!(small.as_array().unwrap().len(), 3);
}
