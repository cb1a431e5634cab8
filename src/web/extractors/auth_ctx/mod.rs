/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証済みリクエストのコンテキスト（AuthCtx）と、所有者チェック済みの投稿（OwnedPost）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 */

mod core;
mod types;

pub use core::CurrentUser;
pub use types::{AuthCtx, OwnedPost};
