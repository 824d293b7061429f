use axum::Json;
use serde_json::{Value, json};

pub mod common;
pub mod post;
pub mod product;
pub mod user;

// 根路径返回一段固定的演示数据
pub async fn index() -> Json<Value> {
    Json(json!({
        "user_id": 1,
        "user": "ilya",
        "email": "ilya@example.com"
    }))
}
