/*
 * Responsibility
 * - store が上位に伝える意味の定義
 * - sqlx / migration のエラーをひとまとめにし、AppError 側で Internal に落とす
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    #[error("migration error")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type RepoResult<T> = Result<T, RepoError>;
