/*
 * Responsibility
 * - 管理画面フォームの状態 (作成 / 編集 + 編集中の id)
 * - 必須項目のバリデーション (title, author, excerpt, content)
 * - 作成は POST、編集は PUT (全置換) に振り分ける
 * - プレビューは保存しない (store には触らない)
 *
 * 同じ記事を 2 人が同時に編集すると後勝ちで上書きされる (ロックもバージョンも持たない)
 */
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::repos::{NewPost, Post, PostId, PostRepo, RepoError};

pub const PREVIEW_CONTENT_LIMIT: usize = 200;

/// Raw admin form input. Every field is optional on the wire; blanks are handled by `validate()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    /// Hidden field holding the id under edit; blank means "create".
    pub post_id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub excerpt: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PostId),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// A draft whose required fields are present (already trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPost {
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub excerpt: String,
    pub content: String,
}

impl ValidPost {
    pub fn into_new_post(self, date: String) -> NewPost {
        NewPost {
            title: self.title,
            author: self.author,
            category: self.category,
            image: self.image,
            excerpt: self.excerpt,
            content: self.content,
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields (title, author, excerpt, and content).")]
pub struct DraftError {
    pub missing: Vec<&'static str>,
}

/// Non-persisted preview values, with placeholders for blank fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPost {
    pub title: String,
    pub author: String,
    pub category: String,
    pub image: Option<String>,
    pub excerpt: String,
    pub content: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    optional(value).unwrap_or_else(|| placeholder.to_string())
}

impl PostDraft {
    /// Form values for editing an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            post_id: post.id.to_string(),
            title: post.title.clone(),
            author: post.author.clone(),
            category: post.category.clone().unwrap_or_default(),
            image: post.image.clone().unwrap_or_default(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        match PostId::parse(&self.post_id) {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn validate(&self) -> Result<ValidPost, DraftError> {
        let required = [
            ("title", &self.title),
            ("author", &self.author),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(DraftError { missing });
        }

        Ok(ValidPost {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            category: optional(&self.category),
            image: optional(&self.image),
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.trim().to_string(),
        })
    }

    pub fn preview(&self) -> PreviewPost {
        let content = or_placeholder(&self.content, "Preview content would appear here...");
        let content = if content.chars().count() > PREVIEW_CONTENT_LIMIT {
            let head: String = content.chars().take(PREVIEW_CONTENT_LIMIT).collect();
            format!("{head}...")
        } else {
            content
        };

        PreviewPost {
            title: or_placeholder(&self.title, "Preview Title"),
            author: or_placeholder(&self.author, "Preview Author"),
            category: or_placeholder(&self.category, "Uncategorized"),
            image: optional(&self.image),
            excerpt: or_placeholder(&self.excerpt, "Preview excerpt text..."),
            content,
        }
    }
}

/// Timestamp format written into `date` (same shape as JavaScript's `toISOString`).
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Published(Post),
    Updated(Post),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error("failed to {action} post: {source}")]
    Repo {
        action: &'static str,
        #[source]
        source: RepoError,
    },
}

impl SaveError {
    fn repo(mode: &FormMode, source: RepoError) -> Self {
        let action = if mode.is_editing() { "update" } else { "publish" };
        SaveError::Repo { action, source }
    }
}

/// Validates the draft, then creates (POST) or replaces (PUT) depending on the held id.
///
/// A replacement keeps the stored `date`: the current record is read first because PUT
/// overwrites the whole document.
pub async fn save(
    repo: &dyn PostRepo,
    draft: &PostDraft,
    now: DateTime<Utc>,
) -> Result<Saved, SaveError> {
    let valid = draft.validate()?;
    let mode = draft.mode();

    match &mode {
        FormMode::Create => {
            let created = repo
                .create(&valid.into_new_post(iso_timestamp(now)))
                .await
                .map_err(|e| SaveError::repo(&mode, e))?;
            Ok(Saved::Published(created))
        }
        FormMode::Edit(id) => {
            let existing = repo.get(id).await.map_err(|e| SaveError::repo(&mode, e))?;
            let date = if existing.date.trim().is_empty() {
                iso_timestamp(now)
            } else {
                existing.date
            };
            let updated = repo
                .replace(id, &valid.into_new_post(date))
                .await
                .map_err(|e| SaveError::repo(&mode, e))?;
            Ok(Saved::Updated(updated))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::memory::{Call, MemoryPostRepo, sample_post};
    use chrono::TimeZone;

    fn filled() -> PostDraft {
        PostDraft {
            post_id: String::new(),
            title: "  Hello  ".into(),
            author: "Ada".into(),
            category: "   ".into(),
            image: "".into(),
            excerpt: "Short".into(),
            content: "Line one\nLine two".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()
    }

    #[test]
    fn validate_trims_and_drops_blank_optionals() {
        let valid = filled().validate().unwrap();
        assert_eq!(valid.title, "Hello");
        assert_eq!(valid.category, None);
        assert_eq!(valid.image, None);
    }

    #[test]
    fn validate_reports_every_missing_required_field() {
        let draft = PostDraft {
            title: " ".into(),
            content: "".into(),
            ..filled()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.missing, vec!["title", "content"]);
    }

    #[test]
    fn mode_follows_the_held_id() {
        assert_eq!(filled().mode(), FormMode::Create);
        let editing = PostDraft {
            post_id: "12".into(),
            ..filled()
        };
        assert_eq!(editing.mode(), FormMode::Edit(PostId::parse("12").unwrap()));
    }

    #[test]
    fn preview_fills_placeholders() {
        let preview = PostDraft::default().preview();
        assert_eq!(preview.title, "Preview Title");
        assert_eq!(preview.author, "Preview Author");
        assert_eq!(preview.category, "Uncategorized");
        assert_eq!(preview.image, None);
        assert_eq!(preview.excerpt, "Preview excerpt text...");
        assert_eq!(preview.content, "Preview content would appear here...");
    }

    #[test]
    fn preview_truncates_long_content_by_characters() {
        let draft = PostDraft {
            content: "é".repeat(250),
            ..filled()
        };
        let preview = draft.preview();
        assert_eq!(preview.content.chars().count(), PREVIEW_CONTENT_LIMIT + 3);
        assert!(preview.content.ends_with("..."));
    }

    #[test]
    fn iso_timestamp_matches_javascript_shape() {
        assert_eq!(iso_timestamp(now()), "2024-03-09T14:05:00.000Z");
    }

    #[tokio::test]
    async fn save_creates_with_current_timestamp() {
        let repo = MemoryPostRepo::default();
        let saved = save(&repo, &filled(), now()).await.unwrap();

        let Saved::Published(post) = saved else {
            panic!("expected a published post");
        };
        assert_eq!(post.date, "2024-03-09T14:05:00.000Z");
        assert_eq!(repo.calls(), vec![Call::Create]);
    }

    #[tokio::test]
    async fn save_in_edit_mode_replaces_and_keeps_date() {
        let repo = MemoryPostRepo::with_posts(vec![sample_post(1, "2023-12-01T08:00:00.000Z")]);
        let draft = PostDraft {
            post_id: "1".into(),
            ..filled()
        };

        let saved = save(&repo, &draft, now()).await.unwrap();

        let Saved::Updated(post) = saved else {
            panic!("expected an updated post");
        };
        assert_eq!(post.title, "Hello");
        assert_eq!(post.date, "2023-12-01T08:00:00.000Z");
        let id = PostId::parse("1").unwrap();
        assert_eq!(repo.calls(), vec![Call::Get(id.clone()), Call::Replace(id)]);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_store() {
        let repo = MemoryPostRepo::default();
        let draft = PostDraft {
            author: "".into(),
            ..filled()
        };

        let err = save(&repo, &draft, now()).await.unwrap_err();
        assert!(matches!(err, SaveError::Invalid(_)));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn editing_a_deleted_post_fails_as_update() {
        let repo = MemoryPostRepo::default();
        let draft = PostDraft {
            post_id: "99".into(),
            ..filled()
        };

        let err = save(&repo, &draft, now()).await.unwrap_err();
        assert!(matches!(
            err,
            SaveError::Repo {
                action: "update",
                source: RepoError::NotFound
            }
        ));
    }
}
