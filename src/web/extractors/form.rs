/*
 * Responsibility
 * - application/x-www-form-urlencoded の body を受ける extractor
 * - axum::Form の rejection (415 / 413 / 422 の plain text) を AppError (エラーページ) に揃える
 * - 入力値の検証 (validator) は handler 側
 */
use axum::{
    Form,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

pub struct HtmlForm<T>(pub T);

impl<T> FromRequest<AppState> for HtmlForm<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
