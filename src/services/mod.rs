/*
 * Responsibility
 * - ページから使うドメインロジック
 *   - listing: 一覧のページング / featured post
 *   - editor: 管理画面フォームの検証 / 保存 / プレビュー
 */
pub mod editor;
pub mod listing;
