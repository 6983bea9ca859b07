/*
 * Responsibility
 * - 各ページの query string の受け口 (?page= / ?id= / ?edit= / ?notice=)
 * - 値は String で受けて寛容に解釈する (不正値で 400 にしない)
 */
use serde::Deserialize;

use crate::repos::PostId;
use crate::services::listing::MAX_PAGE;

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub page: Option<String>,
}

impl ListingParams {
    /// 1-based page number; garbage, zero and missing values read as 1.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(1)
            .max(1)
    }

    /// Page for the index, which replays every page up to it.
    pub fn replay_page(&self) -> u32 {
        self.page().min(MAX_PAGE)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    pub id: Option<String>,
}

impl ArticleParams {
    pub fn id(&self) -> Option<PostId> {
        self.id.as_deref().and_then(PostId::parse)
    }
}

/// Outcome of a redirected admin action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Published,
    Updated,
    Deleted,
    DeleteFailed,
}

impl Notice {
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "published" => Some(Self::Published),
            "updated" => Some(Self::Updated),
            "deleted" => Some(Self::Deleted),
            "delete_failed" => Some(Self::DeleteFailed),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::DeleteFailed => "delete_failed",
        }
    }

    /// `/admin?notice=...`
    pub fn redirect_target(&self) -> String {
        format!("/admin?notice={}", self.as_param())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminParams {
    pub edit: Option<String>,
    pub notice: Option<String>,
}

impl AdminParams {
    pub fn edit_id(&self) -> Option<PostId> {
        self.edit.as_deref().and_then(PostId::parse)
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::from_param)
    }
}
