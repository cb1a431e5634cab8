/*
 * Responsibility
 * - POST/DELETE /posts/{post_id}/likes
 * - (current user, post) の like を付け外しして詳細ページへ戻す
 */
use axum::{extract::State, response::Redirect};

use crate::{
    error::AppError,
    repos::PostRow,
    state::AppState,
    web::extractors::{CurrentUser, PublicPostId},
};

async fn find_post(state: &AppState, post_id: PublicPostId) -> Result<PostRow, AppError> {
    state
        .store
        .find_post(post_id.id)
        .await?
        .ok_or_else(|| AppError::not_found("post"))
}

fn back_to_post(state: &AppState, post: &PostRow) -> Result<Redirect, AppError> {
    let public_id = state.id_codec.encode(post.post_id)?;
    Ok(Redirect::to(&format!("/posts/{public_id}")))
}

pub async fn like_post(
    State(state): State<AppState>,
    CurrentUser(auth): CurrentUser,
    post_id: PublicPostId,
) -> Result<Redirect, AppError> {
    let post = find_post(&state, post_id).await?;

    if state.store.add_like(auth.user_id, post.post_id).await? {
        tracing::info!(post_id = post.post_id, user_id = %auth.user_id, "post liked");
    }

    back_to_post(&state, &post)
}

pub async fn unlike_post(
    State(state): State<AppState>,
    CurrentUser(auth): CurrentUser,
    post_id: PublicPostId,
) -> Result<Redirect, AppError> {
    let post = find_post(&state, post_id).await?;

    if state.store.remove_like(auth.user_id, post.post_id).await? {
        tracing::info!(post_id = post.post_id, user_id = %auth.user_id, "post unliked");
    }

    back_to_post(&state, &post)
}
