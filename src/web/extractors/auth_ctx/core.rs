use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::AuthCtx;

/// Handler で AuthCtx を受け取るための extractor
/// middleware が AuthCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は認証 middleware の掛け忘れ (= プログラムのバグ) なので 500
pub struct CurrentUser(pub AuthCtx);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::error!(
                    path = %parts.uri.path(),
                    "current user is missing; authentication middleware not applied"
                );
                AppError::Internal
            })
    }
}
