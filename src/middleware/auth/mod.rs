/*
 * Responsibility
 * - 認証 (session cookie → AuthCtx) と所有者チェック (post.authorId == current user)
 */
pub mod owner;
pub mod session;
