use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    // 密码按明文存储（已知缺陷）
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub async fn insert(pool: &SqlitePool, req: &CreateUser) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password)
            VALUES (?, ?, ?)
            RETURNING id, username, email, password
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password
            FROM users
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await
    }

    // 整体覆盖：每个字段都以输入为准；记录不存在时返回 None
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        req: &CreateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = ?, email = ?, password = ?
            WHERE id = ?
            RETURNING id, username, email, password
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.password)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // 批量导入：单事务内逐条插入，任一失败则整批回滚
    pub async fn insert_many(pool: &SqlitePool, batch: &[CreateUser]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for req in batch {
            sqlx::query("INSERT INTO users (username, email, password) VALUES (?, ?, ?)")
                .bind(&req.username)
                .bind(&req.email)
                .bind(&req.password)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(batch.len() as u64)
    }
}
