//! Storage interface used by the handlers and the auth middleware.
use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::{PostRow, RepoResult, UserRow};

/// Posts, users and likes, as seen by the web layer.
///
/// Implementations are shared behind `Arc<dyn Store>` in `AppState`, so they must be
/// `Send + Sync`. Consistency between concurrent requests is whatever the backend gives;
/// there is no locking above this trait (last write wins on edits).
#[async_trait]
pub trait Store: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    /// All posts, newest first.
    async fn list_posts(&self) -> RepoResult<Vec<PostRow>>;

    async fn find_post(&self, post_id: i64) -> RepoResult<Option<PostRow>>;

    async fn create_post(&self, content: &str, author_id: Uuid) -> RepoResult<PostRow>;

    /// Returns `None` when the post no longer exists.
    async fn update_post_content(
        &self,
        post_id: i64,
        content: &str,
    ) -> RepoResult<Option<PostRow>>;

    /// Deletes the post together with its likes. Returns `false` if nothing was deleted.
    async fn delete_post(&self, post_id: i64) -> RepoResult<bool>;

    async fn find_user(&self, user_id: Uuid) -> RepoResult<Option<UserRow>>;

    async fn find_user_by_name(&self, user_name: &str) -> RepoResult<Option<UserRow>>;

    /// User names are unique; creating an existing name returns the stored user.
    async fn create_user(&self, user_name: &str, image_url: Option<&str>) -> RepoResult<UserRow>;

    async fn count_likes(&self, post_id: i64) -> RepoResult<i64>;

    async fn has_liked(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool>;

    // Returns:
    // - `Ok(true)`  if the like was recorded
    // - `Ok(false)` if the user already liked the post
    async fn add_like(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool>;

    async fn remove_like(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool>;
}
