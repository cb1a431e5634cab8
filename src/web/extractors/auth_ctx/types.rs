/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 */
use uuid::Uuid;

use crate::repos::PostRow;

/// Context attached to every request that passed `ensure_auth_user`.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: Uuid,
    pub user_name: String,
}

impl AuthCtx {
    pub fn new(user_id: Uuid, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }
}

/// The post loaded by `ensure_owner_of_post`; only present once ownership was checked.
#[derive(Debug, Clone)]
pub struct OwnedPost(pub PostRow);
