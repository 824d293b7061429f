// 种子数据导入
// 从远端 JSON API 拉取一份文档，映射成各实体的创建请求后批量入库。
// 任务在请求周期外运行，失败只记录日志，不向触发方反馈。

use std::fmt;

use serde::Deserialize;
use sqlx::SqlitePool;

use crate::routes::post::{CreatePost, Post};
use crate::routes::product::{CreateProduct, Product};
use crate::routes::user::{CreateUser, User};

#[derive(Debug)]
pub enum SeedError {
    // 网络错误、非 2xx 状态或响应体不是合法 JSON
    Fetch(reqwest::Error),
    Database(sqlx::Error),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Fetch(e) => write!(f, "远端请求失败: {}", e),
            SeedError::Database(e) => write!(f, "数据库写入失败: {}", e),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<reqwest::Error> for SeedError {
    fn from(e: reqwest::Error) -> Self {
        SeedError::Fetch(e)
    }
}

impl From<sqlx::Error> for SeedError {
    fn from(e: sqlx::Error) -> Self {
        SeedError::Database(e)
    }
}

// 远端文档结构：只认识需要的子字段，多余字段忽略，缺失字段取空值

#[derive(Debug, Deserialize)]
struct RemoteUsers {
    #[serde(default)]
    users: Vec<RemoteUser>,
}

#[derive(Debug, Deserialize)]
struct RemoteUser {
    #[serde(rename = "firstName", default)]
    first_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Deserialize)]
struct RemotePosts {
    #[serde(default)]
    posts: Vec<RemotePost>,
}

#[derive(Debug, Deserialize)]
struct RemotePost {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Deserialize)]
struct RemoteProducts {
    #[serde(default)]
    products: Vec<RemoteProduct>,
}

#[derive(Debug, Deserialize)]
struct RemoteProduct {
    #[serde(default)]
    title: String,
    // 远端价格可能带小数，入库前截断取整
    #[serde(default)]
    price: f64,
}

async fn fetch<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, SeedError> {
    let payload = reqwest::get(url)
        .await?
        .error_for_status()?
        .json::<T>()
        .await?;

    Ok(payload)
}

pub async fn import_users(pool: &SqlitePool, base_url: &str) -> Result<u64, SeedError> {
    let payload: RemoteUsers = fetch(&format!("{}/users", base_url)).await?;

    let batch: Vec<CreateUser> = payload
        .users
        .into_iter()
        .map(|u| CreateUser {
            username: u.first_name,
            email: u.email,
            password: u.password,
        })
        .collect();

    let inserted = User::insert_many(pool, &batch).await?;
    tracing::info!("已导入 {} 个用户", inserted);
    Ok(inserted)
}

pub async fn import_posts(pool: &SqlitePool, base_url: &str) -> Result<u64, SeedError> {
    let payload: RemotePosts = fetch(&format!("{}/posts", base_url)).await?;

    let batch: Vec<CreatePost> = payload
        .posts
        .into_iter()
        .map(|p| CreatePost {
            title: p.title,
            content: p.body,
        })
        .collect();

    let inserted = Post::insert_many(pool, &batch).await?;
    tracing::info!("已导入 {} 篇文章", inserted);
    Ok(inserted)
}

pub async fn import_products(pool: &SqlitePool, base_url: &str) -> Result<u64, SeedError> {
    let payload: RemoteProducts = fetch(&format!("{}/products", base_url)).await?;

    let batch: Vec<CreateProduct> = payload
        .products
        .into_iter()
        .map(|p| CreateProduct {
            title: p.title,
            price: p.price as i64,
        })
        .collect();

    let inserted = Product::insert_many(pool, &batch).await?;
    tracing::info!("已导入 {} 个商品", inserted);
    Ok(inserted)
}
