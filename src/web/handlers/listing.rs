/*
 * Responsibility
 * - GET / (featured + 1..=page の一覧)
 * - GET /posts/more?page=N ("load more" で追記するカード断片)
 * - featured と一覧は並行に取得し、両方を待ってから描画する
 */
use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::{
    services::listing::{self, Listing},
    state::AppState,
    web::{dto::queries::ListingParams, views},
};

pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Html<String> {
    let repo = state.posts.as_ref();
    let (featured, listing) = tokio::join!(
        listing::fetch_featured(repo),
        listing::load(repo, state.posts_per_page, params.replay_page()),
    );

    Html(views::listing::page(featured.as_ref(), &listing))
}

pub async fn more(State(state): State<AppState>, Query(params): Query<ListingParams>) -> Response {
    let page = params.page();

    // fetch_page already logged the failure.
    let Ok(posts) = listing::fetch_page(state.posts.as_ref(), page, state.posts_per_page).await
    else {
        return (StatusCode::BAD_GATEWAY, Html(views::listing::more_failed())).into_response();
    };

    let mut listing = Listing::new(state.posts_per_page);
    listing.apply_page(page, posts);

    let body = Html(views::listing::cards(&listing));
    match listing.next_page() {
        Some(next) => (
            [(
                HeaderName::from_static(views::listing::NEXT_PAGE_HEADER),
                HeaderValue::from(next),
            )],
            body,
        )
            .into_response(),
        None => body.into_response(),
    }
}
