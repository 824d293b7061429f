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

use super::model::{CreateUser, User};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateUser>, AppError>,
) -> Result<(StatusCode, Json<User>), AppError> {
    // 邮箱唯一性不做预检查，交给存储层的唯一约束
    let user = User::insert(&state.pool, &req)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => AppError::Conflict("邮箱已被使用".to_string()),
            other => other,
        })?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
pub async fn read_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = User::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("用户不存在".to_string()))?;

    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<CreateUser>, AppError>,
) -> Result<Json<User>, AppError> {
    let user = User::update(&state.pool, user_id, &req)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => AppError::Conflict("邮箱已被使用".to_string()),
            other => other,
        })?
        .ok_or_else(|| AppError::NotFound("用户不存在".to_string()))?;

    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !User::delete_by_id(&state.pool, user_id).await? {
        return Err(AppError::NotFound("用户不存在".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: "用户已删除".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<User>>, AppError> {
    let (skip, limit) = page.resolve();
    let users = User::list(&state.pool, skip, limit).await?;

    Ok(Json(users))
}

// 触发后台导入，立即返回确认，不等待任务完成
#[axum::debug_handler]
pub async fn import_users(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let pool = state.pool.clone();
    let base_url = state.config.seed_api_base_url.clone();

    tokio::spawn(async move {
        if let Err(e) = seed::import_users(&pool, &base_url).await {
            tracing::error!("用户种子数据导入失败: {}", e);
        }
    });

    (
        StatusCode::ACCEPTED,
        Json(json!({ "message": "用户导入任务已启动" })),
    )
}
