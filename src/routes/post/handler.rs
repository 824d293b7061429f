use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde_json::{Value, json};

use crate::{
    AppState,
    error::AppError,
    routes::common::{DeleteResponse, Pagination},
    seed,
};

use super::model::{CreatePost, Post};

#[axum::debug_handler]
pub async fn create_post(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreatePost>, AppError>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = Post::insert(&state.pool, &req).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[axum::debug_handler]
pub async fn read_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Post>, AppError> {
    let post = Post::find_by_id(&state.pool, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("文章不存在".to_string()))?;

    Ok(Json(post))
}

#[axum::debug_handler]
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<CreatePost>, AppError>,
) -> Result<Json<Post>, AppError> {
    let post = Post::update(&state.pool, post_id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("文章不存在".to_string()))?;

    Ok(Json(post))
}

#[axum::debug_handler]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !Post::delete_by_id(&state.pool, post_id).await? {
        return Err(AppError::NotFound("文章不存在".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: "文章已删除".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Post>>, AppError> {
    let (skip, limit) = page.resolve();
    let posts = Post::list(&state.pool, skip, limit).await?;

    Ok(Json(posts))
}

#[axum::debug_handler]
pub async fn import_posts(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let pool = state.pool.clone();
    let base_url = state.config.seed_api_base_url.clone();

    tokio::spawn(async move {
        if let Err(e) = seed::import_posts(&pool, &base_url).await {
            tracing::error!("文章种子数据导入失败: {}", e);
        }
    });

    (
        StatusCode::ACCEPTED,
        Json(json!({ "message": "文章导入任务已启动" })),
    )
}
