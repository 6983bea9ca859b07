/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - posts: store へのアクセス (Arc<dyn PostRepo>), 一覧のページサイズ
 * - Clone 前提で持つ (内部は Arc/Copy で cheap)
 * - ページ間で共有する可変状態は持たない (page counter / 編集状態は query とフォームで運ぶ)
 */
use std::sync::Arc;

use crate::repos::PostRepo;

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepo>,
    pub posts_per_page: usize,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepo>, posts_per_page: usize) -> Self {
        Self {
            posts,
            posts_per_page: posts_per_page.max(1),
        }
    }
}
