//! 投稿の所有者チェック
//!
//! `/posts/{post_id}` 系の変更ルートに route_layer で掛ける。
//! 認証 middleware の内側で動く前提 (AuthCtx が extensions にあること)。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::extractors::{AuthCtx, OwnedPost, PublicPostId};

/// Loads the post, rejects anyone but its author (403) and hands the post to the handler
/// as [`OwnedPost`].
pub async fn ensure_owner_of_post(
    State(state): State<AppState>,
    post_id: PublicPostId,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user_id) = req.extensions().get::<AuthCtx>().map(|ctx| ctx.user_id) else {
        tracing::error!("ownership check ran without an authenticated user");
        return Err(AppError::Internal);
    };

    let post = state
        .store
        .find_post(post_id.id)
        .await?
        .ok_or_else(|| AppError::not_found("post"))?;

    if post.author_id != user_id {
        tracing::warn!(post_id = post.post_id, %user_id, "rejected non-owner");
        return Err(AppError::Forbidden);
    }

    req.extensions_mut().insert(OwnedPost(post));

    Ok(next.run(req).await)
}
