/*
 * Responsibility
 * - handler / middleware が受け取る extractor の公開窓口
 */
pub mod auth_ctx;
pub mod form;
pub mod public_id;

pub use auth_ctx::{AuthCtx, CurrentUser, OwnedPost};
pub use form::HtmlForm;
pub use public_id::PublicPostId;
