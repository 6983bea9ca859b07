/*
 * Responsibility
 * - GET /admin (一覧 + フォーム / ?edit= で編集モード / ?notice= で結果表示)
 * - POST /admin/posts (作成 or 更新 → 成功時は /admin へ redirect してフォームをリセット)
 * - POST /admin/preview (保存せずにプレビューを描画)
 * - GET/POST /admin/posts/{id}/delete (確認 → 削除)
 */
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tracing::{error, info};

use crate::{
    repos::ListQuery,
    services::editor::{self, PostDraft, SaveError, Saved},
    state::AppState,
    web::{
        dto::queries::{AdminParams, Notice},
        extractors::PathPostId,
        views::{
            self,
            admin::{AdminView, Banner, PostsPanel},
            format::long_date_time,
        },
    },
};

pub const WELCOME_MESSAGE: &str = "Welcome!";
pub const EDIT_LOAD_FAILED_MESSAGE: &str = "Failed to load post for editing. Please try again.";

async fn load_panel(state: &AppState) -> PostsPanel {
    match state.posts.list(&ListQuery::newest_first()).await {
        Ok(posts) => {
            if posts.is_empty() {
                info!("no posts found; add one through the admin panel");
            }
            PostsPanel::Loaded(posts)
        }
        Err(e) => {
            error!(backend = state.posts.backend_name(), error = %e, "failed to fetch posts");
            PostsPanel::Failed
        }
    }
}

fn notice_banner(notice: Notice) -> Banner {
    match notice {
        Notice::Published => Banner::success("Post published successfully!"),
        Notice::Updated => Banner::success("Post updated successfully!"),
        Notice::Deleted => Banner::success("Post deleted successfully!"),
        Notice::DeleteFailed => Banner::error("Failed to delete post. Please try again."),
    }
}

async fn render(
    state: &AppState,
    draft: &PostDraft,
    banner: Option<Banner>,
    preview: Option<(editor::PreviewPost, String)>,
) -> Html<String> {
    let posts = load_panel(state).await;
    Html(views::admin::page(AdminView {
        posts: &posts,
        draft,
        banner,
        preview,
    }))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<AdminParams>,
) -> Html<String> {
    let edit_id = params.edit_id();

    let load_draft = async {
        let Some(id) = edit_id.as_ref() else {
            return Ok(PostDraft::default());
        };
        state
            .posts
            .get(id)
            .await
            .map(|post| PostDraft::from_post(&post))
            .map_err(|e| {
                error!(%id, error = %e, "failed to load post for editing");
                Banner::error(EDIT_LOAD_FAILED_MESSAGE)
            })
    };
    let (draft, posts) = tokio::join!(load_draft, load_panel(&state));

    let (draft, banner) = match draft {
        Ok(draft) => {
            let banner = params
                .notice()
                .map(notice_banner)
                .or_else(|| edit_id.is_none().then(|| Banner::info(WELCOME_MESSAGE)));
            (draft, banner)
        }
        Err(banner) => (PostDraft::default(), Some(banner)),
    };

    Html(views::admin::page(AdminView {
        posts: &posts,
        draft: &draft,
        banner,
        preview: None,
    }))
}

pub async fn submit(State(state): State<AppState>, Form(draft): Form<PostDraft>) -> Response {
    match editor::save(state.posts.as_ref(), &draft, Utc::now()).await {
        Ok(Saved::Published(post)) => {
            info!(id = %post.id, "post published");
            Redirect::to(&Notice::Published.redirect_target()).into_response()
        }
        Ok(Saved::Updated(post)) => {
            info!(id = %post.id, "post updated");
            Redirect::to(&Notice::Updated.redirect_target()).into_response()
        }
        Err(SaveError::Invalid(e)) => {
            let banner = Banner::error(e.to_string());
            let page = render(&state, &draft, Some(banner), None).await;
            (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
        }
        Err(e @ SaveError::Repo { .. }) => {
            error!(error = %e, "failed to save post");
            let message = if draft.mode().is_editing() {
                "Failed to update post. Please try again."
            } else {
                "Failed to publish post. Please try again."
            };
            let page = render(&state, &draft, Some(Banner::error(message)), None).await;
            (StatusCode::BAD_GATEWAY, page).into_response()
        }
    }
}

pub async fn preview(State(state): State<AppState>, Form(draft): Form<PostDraft>) -> Html<String> {
    let preview = draft.preview();
    let date_text = long_date_time(&editor::iso_timestamp(Utc::now()));

    render(&state, &draft, None, Some((preview, date_text))).await
}

pub async fn confirm_delete(PathPostId(id): PathPostId) -> Html<String> {
    Html(views::admin::confirm_delete_page(id.as_str()))
}

pub async fn delete(State(state): State<AppState>, PathPostId(id): PathPostId) -> Redirect {
    match state.posts.delete(&id).await {
        Ok(()) => {
            info!(%id, "post deleted");
            Redirect::to(&Notice::Deleted.redirect_target())
        }
        Err(e) => {
            error!(%id, error = %e, "failed to delete post");
            Redirect::to(&Notice::DeleteFailed.redirect_target())
        }
    }
}
