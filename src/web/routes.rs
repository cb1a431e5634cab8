/*
 * Responsibility
 * - 画面側の URL 構造を定義
 * - /posts 系は全て認証必須 (session middleware)、変更系はさらに owner middleware を route_layer で掛ける
 * - /login, /logout は認証の外 (開発用)
 */
use axum::{
    Router,
    middleware,
    routing::{get, patch, post},
};

use crate::middleware::auth::{owner::ensure_owner_of_post, session};
use crate::state::AppState;
use crate::web::handlers::{
    likes::{like_post, unlike_post},
    posts::{
        create_post, delete_post, edit_post, list_posts, new_post, show_post, update_post,
    },
    sessions::{create_session, destroy_session, new_session},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let owner_only = || middleware::from_fn_with_state(state.clone(), ensure_owner_of_post);

    let posts = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/new", get(new_post))
        .route(
            "/posts/{post_id}",
            get(show_post).merge(
                patch(update_post)
                    .delete(delete_post)
                    .route_layer(owner_only()),
            ),
        )
        .route(
            "/posts/{post_id}/edit",
            get(edit_post).route_layer(owner_only()),
        )
        .route(
            "/posts/{post_id}/likes",
            post(like_post).delete(unlike_post),
        );

    session::apply(posts, state)
}

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route(session::LOGIN_PATH, get(new_session).post(create_session))
        .route("/logout", post(destroy_session))
}
