/*
 * Responsibility
 * - posts CRUD
 * - authorId の FK (CASCADE) 前提で削除挙動を意識 (likes も一緒に消える)
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostRow {
    #[sqlx(rename = "postId")]
    pub post_id: i64,

    pub content: String,

    #[sqlx(rename = "authorId")]
    pub author_id: Uuid,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn list(pool: &PgPool) -> RepoResult<Vec<PostRow>> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT
            "postId", content, "authorId", "createdAt", "updatedAt"
        FROM posts
        ORDER BY "postId" DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn create(pool: &PgPool, content: &str, author_id: Uuid) -> RepoResult<PostRow> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (content, "authorId")
        VALUES ($1, $2)
        RETURNING
            "postId", content, "authorId", "createdAt", "updatedAt"
        "#,
    )
    .bind(content)
    .bind(author_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get(pool: &PgPool, post_id: i64) -> RepoResult<Option<PostRow>> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT
            "postId", content, "authorId", "createdAt", "updatedAt"
        FROM posts
        WHERE "postId" = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn update_content(
    pool: &PgPool,
    post_id: i64,
    content: &str,
) -> RepoResult<Option<PostRow>> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET
            content = $2,
            "updatedAt" = now()
        WHERE "postId" = $1
        RETURNING
            "postId", content, "authorId", "createdAt", "updatedAt"
        "#,
    )
    .bind(post_id)
    .bind(content)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete(pool: &PgPool, post_id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE "postId" = $1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
