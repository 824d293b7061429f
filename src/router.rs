use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{AppState, routes};

// 用户相关的路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(routes::user::create_user).get(routes::user::list_users),
        )
        .route(
            "/users/{user_id}",
            get(routes::user::read_user)
                .put(routes::user::update_user)
                .delete(routes::user::delete_user),
        )
        .route("/import/users", post(routes::user::import_users))
}

// 文章相关的路由
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            post(routes::post::create_post).get(routes::post::list_posts),
        )
        .route(
            "/posts/{post_id}",
            get(routes::post::read_post)
                .put(routes::post::update_post)
                .delete(routes::post::delete_post),
        )
        .route("/import/posts", post(routes::post::import_posts))
}

// 商品相关的路由
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            post(routes::product::create_product).get(routes::product::list_products),
        )
        .route(
            "/products/{product_id}",
            get(routes::product::read_product)
                .put(routes::product::update_product)
                .delete(routes::product::delete_product),
        )
        .route("/import/products", post(routes::product::import_products))
}

// 创建主路由，CORS 对所有来源放开
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .merge(user_routes())
        .merge(post_routes())
        .merge(product_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
