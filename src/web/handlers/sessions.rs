/*
 * Responsibility
 * - 開発用ログイン (GET/POST /login, POST /logout)
 * - user_name だけで session を張る。本番 (APP_ENV=production) では mount しない
 * - 資格情報の検証はここでは扱わない
 */
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;
use validator::Validate;

use crate::{
    error::AppError,
    middleware::auth::session::LOGIN_PATH,
    state::AppState,
    web::{
        extractors::HtmlForm,
        forms::{field_errors, sessions::LoginForm},
        session,
        views::{self, SessionsNew},
    },
};

pub async fn new_session() -> Result<impl IntoResponse, AppError> {
    views::render(&SessionsNew {
        notice: None,
        user_name: String::new(),
        errors: Vec::new(),
    })
}

pub async fn create_session(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    HtmlForm(form): HtmlForm<LoginForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.validate() {
        let page = views::render(&SessionsNew {
            notice: None,
            user_name: form.user_name,
            errors: field_errors(&errors),
        })?;
        return Ok(page.into_response());
    }

    let user = match state.store.find_user_by_name(&form.user_name).await? {
        Some(user) => user,
        None => {
            let user = state.store.create_user(&form.user_name, None).await?;
            tracing::info!(user_id = %user.id, "user created on first login");
            user
        }
    };
    tracing::info!(user_id = %user.id, "logged in");

    let jar = session::sign_in(jar, user.id);
    Ok((jar, Redirect::to("/posts")).into_response())
}

pub async fn destroy_session(jar: SignedCookieJar) -> impl IntoResponse {
    (session::sign_out(jar), Redirect::to(LOGIN_PATH))
}
