/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status + errors/show の HTML)
 * - RepoError / IdCodecError / テンプレートエラーを統一的に変換
 */
use askama::Template;
use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::repos::RepoError;
use crate::services::id_codec::IdCodecError;
use crate::web::views::ErrorPage;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("forbidden")]
    Forbidden,
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "You are not allowed to change this post.".into(),
            ),
            AppError::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{resource} not found."))
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong.".into(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let page = ErrorPage {
            notice: None,
            status: status.as_u16(),
            message,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = ?err, "error page rendering failed");
                (status, status.canonical_reason().unwrap_or("error")).into_response()
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        tracing::error!(error = ?e, "store operation failed");
        AppError::Internal
    }
}

impl From<IdCodecError> for AppError {
    fn from(e: IdCodecError) -> Self {
        match e {
            // Client supplied a malformed public id (e.g. /posts/{id})
            IdCodecError::DecodeInvalidFormat | IdCodecError::DecodeOutOfRange => {
                AppError::bad_request("INVALID_PUBLIC_ID", "invalid id")
            }

            // server-side config / programming errors
            _ => {
                tracing::error!(error = ?e, "id codec failure");
                AppError::Internal
            }
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(e: FormRejection) -> Self {
        // wrong content type, oversized body, undecodable fields
        tracing::debug!(error = %e, status = %e.status(), "form rejected");
        AppError::bad_request("INVALID_FORM", e.body_text())
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        tracing::error!(error = ?e, "template rendering failed");
        AppError::Internal
    }
}
