/*
 * Responsibility
 * - HTML ページ (一覧 / 詳細 / 管理画面) の公開ポイント (routes() の re-export など)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;
pub mod views;

pub use routes::routes;
