/*
 * Responsibility
 * - Path の String を PostId として受ける (/admin/posts/{id}/delete など)
 * - 空の id は handler に届く前に 400 ページへ変換する
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{error::AppError, repos::PostId};

#[derive(Debug, Clone)]
pub struct PathPostId(pub PostId);

impl<S> FromRequestParts<S> for PathPostId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("Invalid post id."))?;

        PostId::parse(&raw)
            .map(Self)
            .ok_or_else(|| AppError::bad_request("Invalid post id."))
    }
}
