/*
 * Responsibility
 * - ページの URL 構造を定義
 * - 静的サイト時代の *.html パスも同じ handler に向ける
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::web::handlers::{
    admin::{confirm_delete, dashboard, delete, preview, submit},
    article::show,
    health::health,
    listing::{index, more},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/posts/more", get(more))
        .route("/article", get(show))
        .route("/article.html", get(show))
        .route("/admin", get(dashboard))
        .route("/admin.html", get(dashboard))
        .route("/admin/posts", post(submit))
        .route("/admin/preview", post(preview))
        .route("/admin/posts/{post_id}/delete", get(confirm_delete).post(delete))
}
