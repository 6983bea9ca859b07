/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 * - reqwest のエラーはここで文字列化して閉じ込める (上位に transport の型を漏らさない)
 */
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("post not found")]
    NotFound,
    #[error("store responded with status {0}")]
    Status(u16),
    #[error("store transport error: {0}")]
    Transport(String),
    #[error("store payload error: {0}")]
    Decode(String),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepoError::NotFound)
    }
}

impl From<reqwest::Error> for RepoError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return RepoError::Decode(e.to_string());
        }
        match e.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => RepoError::NotFound,
            Some(status) => RepoError::Status(status.as_u16()),
            None => RepoError::Transport(e.to_string()),
        }
    }
}
