/*
 * Responsibility
 * - Config読み込み → 依存生成 (HttpPostRepo) → Router 組み立て
 * - Middleware の適用 (security headers / request-id / trace / timeout)
 * - tracing と panic hook の初期化
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc, time::Duration};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::middleware;
use crate::repos::HttpPostRepo;
use crate::state::AppState;
use crate::web;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,simple_blog=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,simple_blog=debug,tower_http=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development crashes the process; production keeps serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting blog in {:?} mode on {} (store: {})",
        config.app_env,
        config.addr,
        config.store_base_url
    );

    let state = build_state(&config)?;
    let app = build_router(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    let posts = HttpPostRepo::new(config.store_base_url.clone(), config.store_timeout)?;

    Ok(AppState::new(Arc::new(posts), config.posts_per_page))
}

/// Full application router: pages, health check and every middleware layer.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let router = web::routes().with_state(state);
    let router = middleware::security_headers::apply(router);

    middleware::http::apply(router, request_timeout)
}
