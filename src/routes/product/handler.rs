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

use super::model::{CreateProduct, Product};

// 价格只做非负检查，其余校验由反序列化层完成
fn check_price(req: &CreateProduct) -> Result<(), AppError> {
    if req.price < 0 {
        return Err(AppError::Validation("价格不能为负数".to_string()));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn create_product(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateProduct>, AppError>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    check_price(&req)?;
    let product = Product::insert(&state.pool, &req).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[axum::debug_handler]
pub async fn read_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = Product::find_by_id(&state.pool, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("商品不存在".to_string()))?;

    Ok(Json(product))
}

#[axum::debug_handler]
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<CreateProduct>, AppError>,
) -> Result<Json<Product>, AppError> {
    check_price(&req)?;
    let product = Product::update(&state.pool, product_id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("商品不存在".to_string()))?;

    Ok(Json(product))
}

#[axum::debug_handler]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !Product::delete_by_id(&state.pool, product_id).await? {
        return Err(AppError::NotFound("商品不存在".to_string()));
    }

    Ok(Json(DeleteResponse {
        message: "商品已删除".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn list_products(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Product>>, AppError> {
    let (skip, limit) = page.resolve();
    let products = Product::list(&state.pool, skip, limit).await?;

    Ok(Json(products))
}

#[axum::debug_handler]
pub async fn import_products(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let pool = state.pool.clone();
    let base_url = state.config.seed_api_base_url.clone();

    tokio::spawn(async move {
        if let Err(e) = seed::import_products(&pool, &base_url).await {
            tracing::error!("商品种子数据导入失败: {}", e);
        }
    });

    (
        StatusCode::ACCEPTED,
        Json(json!({ "message": "商品导入任务已启动" })),
    )
}
