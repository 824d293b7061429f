use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    pub price: i64,
}

impl Product {
    pub async fn insert(pool: &SqlitePool, req: &CreateProduct) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (title, price)
            VALUES (?, ?)
            RETURNING id, title, price
            "#,
        )
        .bind(&req.title)
        .bind(req.price)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, title, price FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, price
            FROM products
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        req: &CreateProduct,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET title = ?, price = ?
            WHERE id = ?
            RETURNING id, title, price
            "#,
        )
        .bind(&req.title)
        .bind(req.price)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_many(
        pool: &SqlitePool,
        batch: &[CreateProduct],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for req in batch {
            sqlx::query("INSERT INTO products (title, price) VALUES (?, ?)")
                .bind(&req.title)
                .bind(req.price)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(batch.len() as u64)
    }
}
