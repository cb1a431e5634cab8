use async_trait::async_trait;
use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};
use uuid::Uuid;

use crate::repos::{PostRow, RepoResult, Store, UserRow, like_repo, post_repo, user_repo};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed store.
///
/// Thin adapter: every method delegates to the query functions in the `*_repo` modules.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    // Connect and bring the schema up to date.
    pub async fn connect(url: &str, max_connections: u32) -> RepoResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        MIGRATOR.run(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list_posts(&self) -> RepoResult<Vec<PostRow>> {
        post_repo::list(&self.pool).await
    }

    async fn find_post(&self, post_id: i64) -> RepoResult<Option<PostRow>> {
        post_repo::get(&self.pool, post_id).await
    }

    async fn create_post(&self, content: &str, author_id: Uuid) -> RepoResult<PostRow> {
        post_repo::create(&self.pool, content, author_id).await
    }

    async fn update_post_content(
        &self,
        post_id: i64,
        content: &str,
    ) -> RepoResult<Option<PostRow>> {
        post_repo::update_content(&self.pool, post_id, content).await
    }

    async fn delete_post(&self, post_id: i64) -> RepoResult<bool> {
        // likes go with the post (ON DELETE CASCADE)
        post_repo::delete(&self.pool, post_id).await
    }

    async fn find_user(&self, user_id: Uuid) -> RepoResult<Option<UserRow>> {
        user_repo::get(&self.pool, user_id).await
    }

    async fn find_user_by_name(&self, user_name: &str) -> RepoResult<Option<UserRow>> {
        user_repo::get_by_name(&self.pool, user_name).await
    }

    async fn create_user(&self, user_name: &str, image_url: Option<&str>) -> RepoResult<UserRow> {
        user_repo::create(&self.pool, user_name, image_url).await
    }

    async fn count_likes(&self, post_id: i64) -> RepoResult<i64> {
        like_repo::count_by_post(&self.pool, post_id).await
    }

    async fn has_liked(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
        like_repo::exists_by_user(&self.pool, user_id, post_id).await
    }

    async fn add_like(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
        like_repo::create(&self.pool, user_id, post_id).await
    }

    async fn remove_like(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
        like_repo::delete(&self.pool, user_id, post_id).await
    }
}
