/*
 * Responsibility
 * - GET /article?id=... (記事詳細)
 * - id なし → 400 / store の 404 → 404 / それ以外の失敗 → 502
 */
use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::{error, info};

use crate::{
    error::AppError,
    state::AppState,
    web::{
        dto::queries::ArticleParams,
        views::{
            self,
            article::{MISSING_ID_MESSAGE, NOT_FOUND_MESSAGE, UNAVAILABLE_MESSAGE},
        },
    },
};

pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<ArticleParams>,
) -> Result<Html<String>, AppError> {
    let id = params
        .id()
        .ok_or_else(|| AppError::bad_request(MISSING_ID_MESSAGE))?;

    let post = state.posts.get(&id).await.map_err(|e| {
        if e.is_not_found() {
            info!(%id, "article not found");
        } else {
            error!(%id, error = %e, "failed to fetch article");
        }
        AppError::from_repo(&e, NOT_FOUND_MESSAGE, UNAVAILABLE_MESSAGE)
    })?;

    Ok(Html(views::article::page(&post)))
}
