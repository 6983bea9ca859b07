/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / HTML のエラーページ)
 * - RepoError を統一的に変換 (detail ページの 404 とそれ以外の区別はここ)
 */
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::web::views::layout::error_page;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {message}")]
    BadRequest { message: String },
    #[error("not found: {message}")]
    NotFound { message: String },
    #[error("store unavailable: {message}")]
    Upstream { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Maps a store failure to the page messages for "not found" and "anything else".
    pub fn from_repo(
        e: &RepoError,
        not_found_message: &'static str,
        other_message: &'static str,
    ) -> Self {
        if e.is_not_found() {
            Self::not_found(not_found_message)
        } else {
            Self::upstream(other_message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Upstream { message } => message,
        };

        (status, Html(error_page(&message))).into_response()
    }
}
