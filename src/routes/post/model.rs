use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

impl Post {
    pub async fn insert(pool: &SqlitePool, req: &CreatePost) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content)
            VALUES (?, ?)
            RETURNING id, title, content
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content
            FROM posts
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
        req: &CreatePost,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = ?, content = ?
            WHERE id = ?
            RETURNING id, title, content
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_many(pool: &SqlitePool, batch: &[CreatePost]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for req in batch {
            sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
                .bind(&req.title)
                .bind(&req.content)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(batch.len() as u64)
    }
}
