/*
 * Responsibility
 * - 永続化層の公開インターフェース (Store trait + backend)
 */
pub mod error;
pub mod like_repo;
pub mod memory;
pub mod pg;
pub mod post_repo;
pub mod store;
pub mod user_repo;

pub use error::{RepoError, RepoResult};
pub use memory::MemoryStore;
pub use pg::PgStore;
pub use post_repo::PostRow;
pub use store::Store;
pub use user_repo::UserRow;
