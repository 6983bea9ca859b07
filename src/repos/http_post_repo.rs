use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::repos::{
    error::{RepoError, RepoResult},
    post_repo::{NewPost, Post, PostId, PostRepo},
    query::ListQuery,
};

/// JSON-over-HTTP post repository (json-server style `/posts` collection).
///
/// Every call is a single request: no retries, no caching. The client timeout
/// is the only guard against a stalled store.
#[derive(Clone, Debug)]
pub struct HttpPostRepo {
    http: Client,
    base_url: Url,
}

impl HttpPostRepo {
    // `base_url` must end with `/` so that relative joins keep any path prefix.
    pub fn new(base_url: Url, timeout: Duration) -> RepoResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepoError::Transport(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    fn collection_url(&self) -> RepoResult<Url> {
        self.base_url
            .join("posts")
            .map_err(|e| RepoError::Transport(format!("invalid store url: {e}")))
    }

    fn item_url(&self, id: &PostId) -> RepoResult<Url> {
        let mut url = self.collection_url()?;
        // push() percent-encodes the id, so ids with `/` or `?` cannot escape the path.
        url.path_segments_mut()
            .map_err(|_| RepoError::Transport("store url cannot be a base".to_string()))?
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl PostRepo for HttpPostRepo {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn list(&self, query: &ListQuery) -> RepoResult<Vec<Post>> {
        let url = self.collection_url()?;

        let posts = self
            .http
            .get(url)
            .query(&query.to_pairs())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Post>>()
            .await?;

        Ok(posts)
    }

    async fn get(&self, id: &PostId) -> RepoResult<Post> {
        let url = self.item_url(id)?;

        let post = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Post>()
            .await?;

        Ok(post)
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let url = self.collection_url()?;

        let created = self
            .http
            .post(url)
            .json(post)
            .send()
            .await?
            .error_for_status()?
            .json::<Post>()
            .await?;

        Ok(created)
    }

    async fn replace(&self, id: &PostId, post: &NewPost) -> RepoResult<Post> {
        let url = self.item_url(id)?;

        let replaced = self
            .http
            .put(url)
            .json(post)
            .send()
            .await?
            .error_for_status()?
            .json::<Post>()
            .await?;

        Ok(replaced)
    }

    async fn delete(&self, id: &PostId) -> RepoResult<()> {
        let url = self.item_url(id)?;

        self.http.delete(url).send().await?.error_for_status()?;

        Ok(())
    }
}
