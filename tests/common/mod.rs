#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use record_service::{AppState, app, config::Config, db};

// 内存库测试时连接池只留一个连接，避免每个连接各开一份内存库
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");

    db::init_schema(&pool)
        .await
        .expect("failed to initialize schema");
    pool
}

pub fn test_config(seed_api_base_url: &str) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        seed_api_base_url: seed_api_base_url.to_string(),
    }
}

pub async fn test_state(seed_api_base_url: &str) -> AppState {
    AppState {
        pool: test_pool().await,
        config: test_config(seed_api_base_url),
    }
}

pub async fn test_app() -> (Router, AppState) {
    let state = test_state("http://127.0.0.1:1").await;
    (app(state.clone()), state)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
