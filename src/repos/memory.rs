//! In-memory `PostRepo` for unit tests.
//!
//! Mirrors the store's list contract (sort by date, offset slice, limit) and
//! records every call so tests can assert POST vs PUT.
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::repos::{
    error::{RepoError, RepoResult},
    post_repo::{NewPost, Post, PostId, PostRepo},
    query::{ListQuery, SortOrder},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(ListQuery),
    Get(PostId),
    Create,
    Replace(PostId),
    Delete(PostId),
}

#[derive(Clone, Default)]
pub struct MemoryPostRepo {
    posts: Arc<Mutex<Vec<Post>>>,
    calls: Arc<Mutex<Vec<Call>>>,
    next_id: Arc<Mutex<u64>>,
    failing: Arc<Mutex<bool>>,
}

impl MemoryPostRepo {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let repo = Self::default();
        *repo.next_id.lock().unwrap() = posts.len() as u64 + 1;
        *repo.posts.lock().unwrap() = posts;
        repo
    }

    /// Makes every following call fail with a 500.
    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> RepoResult<()> {
        self.calls.lock().unwrap().push(call);
        if *self.failing.lock().unwrap() {
            return Err(RepoError::Status(500));
        }
        Ok(())
    }
}

pub fn sample_post(id: u64, date: &str) -> Post {
    Post {
        id: PostId::parse(&id.to_string()).unwrap(),
        title: format!("Post {id}"),
        author: "Ada".to_string(),
        category: Some("Rust".to_string()),
        image: None,
        excerpt: format!("Excerpt {id}"),
        content: format!("Body of post {id}"),
        date: date.to_string(),
    }
}

fn materialize(id: PostId, post: &NewPost) -> Post {
    Post {
        id,
        title: post.title.clone(),
        author: post.author.clone(),
        category: post.category.clone(),
        image: post.image.clone(),
        excerpt: post.excerpt.clone(),
        content: post.content.clone(),
        date: post.date.clone(),
    }
}

#[async_trait]
impl PostRepo for MemoryPostRepo {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, query: &ListQuery) -> RepoResult<Vec<Post>> {
        self.record(Call::List(query.clone()))?;

        let mut posts = self.snapshot();
        if query.sort == Some("date") {
            posts.sort_by(|a, b| a.date.cmp(&b.date));
            if query.order == Some(SortOrder::Desc) {
                posts.reverse();
            }
        }

        let start = query.start.unwrap_or(0).min(posts.len());
        let end = query.end.unwrap_or(posts.len()).clamp(start, posts.len());
        let mut slice = posts[start..end].to_vec();
        if let Some(limit) = query.limit {
            slice.truncate(limit);
        }
        Ok(slice)
    }

    async fn get(&self, id: &PostId) -> RepoResult<Post> {
        self.record(Call::Get(id.clone()))?;
        self.snapshot()
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or(RepoError::NotFound)
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        self.record(Call::Create)?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        let created = materialize(PostId::parse(&id.to_string()).unwrap(), post);
        self.posts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn replace(&self, id: &PostId, post: &NewPost) -> RepoResult<Post> {
        self.record(Call::Replace(id.clone()))?;
        let mut posts = self.posts.lock().unwrap();
        let slot = posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(RepoError::NotFound)?;
        *slot = materialize(id.clone(), post);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &PostId) -> RepoResult<()> {
        self.record(Call::Delete(id.clone()))?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| &p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
