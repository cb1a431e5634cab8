//! In-process store for development without a database, and for tests.
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repos::{PostRow, RepoResult, Store, UserRow};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRow>,
    posts: BTreeMap<i64, PostRow>,
    likes: HashSet<(Uuid, i64)>,
    last_post_id: i64,
}

/// Memory-backed store. Cheap to clone; clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_posts(&self) -> RepoResult<Vec<PostRow>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.values().rev().cloned().collect())
    }

    async fn find_post(&self, post_id: i64) -> RepoResult<Option<PostRow>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&post_id).cloned())
    }

    async fn create_post(&self, content: &str, author_id: Uuid) -> RepoResult<PostRow> {
        let mut tables = self.tables.write().await;
        tables.last_post_id += 1;

        let now = Utc::now();
        let row = PostRow {
            post_id: tables.last_post_id,
            content: content.to_string(),
            author_id,
            created_at: now,
            updated_at: now,
        };
        tables.posts.insert(row.post_id, row.clone());

        Ok(row)
    }

    async fn update_post_content(
        &self,
        post_id: i64,
        content: &str,
    ) -> RepoResult<Option<PostRow>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.posts.get_mut(&post_id) else {
            return Ok(None);
        };
        row.content = content.to_string();
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete_post(&self, post_id: i64) -> RepoResult<bool> {
        let mut tables = self.tables.write().await;
        let removed = tables.posts.remove(&post_id).is_some();
        tables.likes.retain(|(_, liked)| *liked != post_id);

        Ok(removed)
    }

    async fn find_user(&self, user_id: Uuid) -> RepoResult<Option<UserRow>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_user_by_name(&self, user_name: &str) -> RepoResult<Option<UserRow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.user_name == user_name)
            .cloned())
    }

    async fn create_user(&self, user_name: &str, image_url: Option<&str>) -> RepoResult<UserRow> {
        let mut tables = self.tables.write().await;
        // "userName" is unique; a concurrent first login may already have inserted it
        if let Some(existing) = tables.users.iter().find(|u| u.user_name == user_name) {
            return Ok(existing.clone());
        }

        let row = UserRow {
            id: Uuid::new_v4(),
            user_name: user_name.to_string(),
            image_url: image_url.map(str::to_string),
        };
        tables.users.push(row.clone());

        Ok(row)
    }

    async fn count_likes(&self, post_id: i64) -> RepoResult<i64> {
        let tables = self.tables.read().await;
        let count = tables
            .likes
            .iter()
            .filter(|(_, liked)| *liked == post_id)
            .count();

        Ok(count as i64)
    }

    async fn has_liked(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.likes.contains(&(user_id, post_id)))
    }

    async fn add_like(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.likes.insert((user_id, post_id)))
    }

    async fn remove_like(&self, user_id: Uuid, post_id: i64) -> RepoResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.likes.remove(&(user_id, post_id)))
    }
}
