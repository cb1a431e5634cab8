/*
 * Responsibility
 * - likes テーブル ((userId, postId) の複合 PK) 向け SQLx 操作
 * - 件数と存在確認、追加/削除のみ
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::RepoResult;

pub async fn count_by_post(db: &PgPool, post_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM likes
        WHERE "postId" = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(db)
    .await?;

    Ok(count)
}

pub async fn exists_by_user(db: &PgPool, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM likes
            WHERE "userId" = $1 AND "postId" = $2
        )
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_one(db)
    .await?;

    Ok(exists)
}

pub async fn create(db: &PgPool, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
    // conflict = already liked
    let result = sqlx::query(
        r#"
        INSERT INTO likes ("userId", "postId")
        VALUES ($1, $2)
        ON CONFLICT ("userId", "postId") DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(db: &PgPool, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM likes
        WHERE "userId" = $1 AND "postId" = $2
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
