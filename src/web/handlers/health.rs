/*
 * Responsibility
 * - GET /health (疎通用)
 * - store には問い合わせない (このプロセスが生きているかと、どの backend を使うかだけ)
 */
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "store": state.posts.backend_name(),
    }))
}
