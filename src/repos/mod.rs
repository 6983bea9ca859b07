pub mod error;
pub mod http_post_repo;
#[cfg(test)]
pub mod memory;
pub mod post_repo;
pub mod query;

pub use error::{RepoError, RepoResult};
pub use http_post_repo::HttpPostRepo;
pub use post_repo::{NewPost, Post, PostId, PostRepo};
pub use query::{ListQuery, SortOrder};
