/*
 * Responsibility
 * - 一覧ページのページング状態 (page counter / 追記 / load more の可否)
 * - featured post (最新 1 件) の取得
 * - store の失敗はここでログに落として状態に変換する (handler は描画だけ)
 */
use tracing::warn;

use crate::repos::{ListQuery, Post, PostRepo, RepoResult};

/// Highest page the index replays; "load more" switches off once it is reached.
pub const MAX_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    Ready,
    /// First page came back empty.
    Empty,
    /// First page could not be fetched.
    Failed,
}

/// Cards accumulated so far and whether another page may exist.
#[derive(Debug, Clone)]
pub struct Listing {
    per_page: usize,
    page: u32,
    posts: Vec<Post>,
    has_more: bool,
    state: ListingState,
}

impl Listing {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            page: 0,
            posts: Vec::new(),
            has_more: false,
            state: ListingState::Ready,
        }
    }

    pub fn apply_page(&mut self, page: u32, posts: Vec<Post>) {
        self.page = page.max(1);

        if self.page == 1 && posts.is_empty() {
            self.state = ListingState::Empty;
            self.has_more = false;
            return;
        }

        // A short page means the store ran out.
        self.has_more = posts.len() >= self.per_page;
        self.posts.extend(posts);
    }

    pub fn apply_failure(&mut self, page: u32) {
        if page <= 1 {
            self.state = ListingState::Failed;
        }
        self.has_more = false;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn state(&self) -> ListingState {
        self.state
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn next_page(&self) -> Option<u32> {
        (self.has_more && self.page < MAX_PAGE).then(|| self.page + 1)
    }
}

pub async fn fetch_page(repo: &dyn PostRepo, page: u32, per_page: usize) -> RepoResult<Vec<Post>> {
    let query = ListQuery::newest_first().page(page, per_page);
    repo.list(&query).await.inspect_err(|err| {
        warn!(
            backend = repo.backend_name(),
            page,
            error = %err,
            "failed to fetch posts page"
        );
    })
}

/// Replays pages `1..=up_to_page` in order, stopping at the first short page or failure.
pub async fn load(repo: &dyn PostRepo, per_page: usize, up_to_page: u32) -> Listing {
    let mut listing = Listing::new(per_page);

    for page in 1..=up_to_page.max(1) {
        match fetch_page(repo, page, listing.per_page).await {
            Ok(posts) => listing.apply_page(page, posts),
            Err(_) => {
                listing.apply_failure(page);
                break;
            }
        }

        if !listing.has_more() {
            break;
        }
    }

    listing
}

/// Most recent post, or `None` when the store is empty or unreachable.
pub async fn fetch_featured(repo: &dyn PostRepo) -> Option<Post> {
    let query = ListQuery::newest_first().limit(1);
    match repo.list(&query).await {
        Ok(posts) => posts.into_iter().next(),
        Err(err) => {
            warn!(backend = repo.backend_name(), error = %err, "failed to fetch featured post");
            None
        }
    }
}
