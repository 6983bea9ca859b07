/**
 * Responsibility
 *  - handler が受け取る extractor の公開
 */
mod post_id;

pub use post_id::PathPostId;
