//! session cookie 検証 → AuthCtx を extensions に入れる
//!
//! - signed cookie `session` から user id を取り出し、users に存在することを確認する
//! - 未ログイン (cookie なし / 改ざん / 存在しない user) は `/login` へ 303 redirect

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::{extractors::AuthCtx, session};

pub const LOGIN_PATH: &str = "/login";

/// Require a logged-in user on every route of `router`.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, ensure_auth_user))
}

async fn ensure_auth_user(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user_id) = session::current_user_id(&jar) else {
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    };

    let Some(user) = state.store.find_user(user_id).await? else {
        tracing::warn!(%user_id, "session refers to an unknown user");
        return Ok((session::sign_out(jar), Redirect::to(LOGIN_PATH)).into_response());
    };

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(user.id, user.user_name));

    Ok(next.run(req).await)
}
