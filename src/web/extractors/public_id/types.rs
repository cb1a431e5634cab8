/**
 * Responsibility
 *  - リソースごとの「意味付きID型」を宣言する
 *
 * 置くもの
 *  - PostTag などのタグ型
 *  - type PublicPostId = PublicId<PostTag> のような alias
 *
 * 置かないもの
 *  - decode ロジック / extractor 実装
 */
use super::core::PublicId;

// posts (/posts/{post_id}, /posts/{post_id}/edit, /posts/{post_id}/likes)
pub enum PostTag {}
pub type PublicPostId = PublicId<PostTag>;
