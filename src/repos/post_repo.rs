/*
 * Responsibility
 * - posts コレクションの型 (Post / NewPost / PostId)
 * - store へのアクセスを抽象化した PostRepo trait
 * - id の一意性・date の順序は store 側に任せる (ここでは検証しない)
 */
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::repos::{error::RepoResult, query::ListQuery};

/// Store-assigned identifier. Numeric ids from older stores are kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Returns `None` for blank input (missing `?id=` / empty hidden field).
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => PostId(s),
            RawId::Unsigned(n) => PostId(n.to_string()),
            RawId::Signed(n) => PostId(n.to_string()),
        })
    }
}

/// A record as returned by the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    /// ISO-8601 text as written by the client at creation.
    #[serde(default)]
    pub date: String,
}

impl Post {
    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    pub fn image(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Request body for create (POST) and full replacement (PUT).
///
/// `category` / `image` serialize as `null` when absent, the same shape the store keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub date: String,
}

/// Access to the `/posts` collection of the backing store.
///
/// Implementations are shared behind `Arc<dyn PostRepo>`, so the trait stays object safe.
#[async_trait]
pub trait PostRepo: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // GET /posts?_sort=..&_order=..&_start=..&_end=..&_limit=..
    async fn list(&self, query: &ListQuery) -> RepoResult<Vec<Post>>;

    // GET /posts/:id
    //
    // Returns `RepoError::NotFound` when the store answers 404.
    async fn get(&self, id: &PostId) -> RepoResult<Post>;

    // POST /posts (the store assigns the id)
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    // PUT /posts/:id (whole record replacement, no partial patch)
    async fn replace(&self, id: &PostId, post: &NewPost) -> RepoResult<Post>;

    // DELETE /posts/:id
    async fn delete(&self, id: &PostId) -> RepoResult<()>;
}
