/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - 投稿の author 表示と、開発用ログインでの lookup/作成だけを提供する
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    #[sqlx(rename = "userName")]
    pub user_name: String,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
}

pub async fn get(db: &PgPool, user_id: Uuid) -> RepoResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "userName", "imageUrl"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn get_by_name(db: &PgPool, user_name: &str) -> RepoResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", "userName", "imageUrl"
        FROM users
        WHERE "userName" = $1
        "#,
    )
    .bind(user_name)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// 同名の user が既にあればその行を返す
pub async fn create(
    db: &PgPool,
    user_name: &str,
    image_url: Option<&str>,
) -> RepoResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users ("userName", "imageUrl")
        VALUES ($1, $2)
        ON CONFLICT ("userName") DO UPDATE SET "userName" = EXCLUDED."userName"
        RETURNING "userId", "userName", "imageUrl"
        "#,
    )
    .bind(user_name)
    .bind(image_url)
    .fetch_one(db)
    .await?;

    Ok(row)
}
