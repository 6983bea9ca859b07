// tests/common/mod.rs
//! Shared helpers for integration tests: an in-process json-server style
//! `/posts` store and request helpers for the blog router.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use simple_blog::{app::build_router, repos::HttpPostRepo, state::AppState};
use tokio::net::TcpListener;
use tower::ServiceExt;
use url::Url;
use uuid::Uuid;

#[derive(Default)]
struct StoreInner {
    posts: Vec<Value>,
    requests: Vec<String>,
}

/// In-memory stand-in for the JSON store, served over real HTTP.
#[derive(Clone, Default)]
pub struct StubStore {
    inner: Arc<Mutex<StoreInner>>,
}

pub fn seed_post(id: u64, date: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Post {id}"),
        "author": "Ada",
        "category": "Rust",
        "image": "",
        "excerpt": format!("Excerpt {id}"),
        "content": format!("First line of {id}\nSecond line of {id}"),
        "date": date,
    })
}

/// Posts 1..=n, post `i` dated 2024-01-i (so the highest id is the newest).
pub fn seeded(n: u64) -> StubStore {
    let posts = (1..=n)
        .map(|i| seed_post(i, &format!("2024-01-{:02}T00:00:00.000Z", i)))
        .collect();
    StubStore::with_posts(posts)
}

/// Posts 1..=n, one minute apart on 2024-01-01, for stores larger than a month of days.
pub fn seeded_by_minute(n: u64) -> StubStore {
    let posts = (1..=n)
        .map(|i| {
            let date = format!("2024-01-01T{:02}:{:02}:00.000Z", i / 60, i % 60);
            seed_post(i, &date)
        })
        .collect();
    StubStore::with_posts(posts)
}

fn id_of(post: &Value) -> String {
    match post.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn sort_key(post: &Value, field: &str) -> String {
    match post.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

impl StubStore {
    pub fn with_posts(posts: Vec<Value>) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().posts = posts;
        store
    }

    pub fn posts(&self) -> Vec<Value> {
        self.inner.lock().unwrap().posts.clone()
    }

    pub fn find(&self, id: &str) -> Option<Value> {
        self.posts().into_iter().find(|p| id_of(p) == id)
    }

    /// `"METHOD /path"` for every request the store received, in order.
    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| !r.starts_with("GET "))
            .collect()
    }

    fn record(&self, line: String) {
        self.inner.lock().unwrap().requests.push(line);
    }

    /// Serves the store on an ephemeral port and returns its base URL.
    pub async fn spawn(&self) -> Url {
        let router = Router::new()
            .route("/posts", get(list_posts).post(create_post))
            .route(
                "/posts/{id}",
                get(get_post).put(replace_post).delete(delete_post),
            )
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Url::parse(&format!("http://{addr}/")).unwrap()
    }
}

async fn list_posts(
    State(store): State<StubStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    store.record("GET /posts".to_string());
    let mut posts = store.posts();

    if let Some(field) = params.get("_sort") {
        posts.sort_by_key(|p| sort_key(p, field));
        if params.get("_order").map(String::as_str) == Some("desc") {
            posts.reverse();
        }
    }

    let number = |key: &str| params.get(key).and_then(|v| v.parse::<usize>().ok());
    if let Some(start) = number("_start") {
        let start = start.min(posts.len());
        let end = number("_end").unwrap_or(posts.len()).clamp(start, posts.len());
        posts = posts[start..end].to_vec();
    }
    if let Some(limit) = number("_limit") {
        posts.truncate(limit);
    }

    Json(Value::Array(posts))
}

async fn get_post(State(store): State<StubStore>, Path(id): Path<String>) -> Response {
    store.record(format!("GET /posts/{id}"));
    match store.find(&id) {
        Some(post) => Json(post).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_post(State(store): State<StubStore>, Json(mut body): Json<Value>) -> Response {
    store.record("POST /posts".to_string());
    if body.get("id").is_none_or(Value::is_null) {
        body["id"] = json!(Uuid::new_v4().simple().to_string());
    }
    store.inner.lock().unwrap().posts.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn replace_post(
    State(store): State<StubStore>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    store.record(format!("PUT /posts/{id}"));
    let mut inner = store.inner.lock().unwrap();
    let Some(slot) = inner.posts.iter_mut().find(|p| id_of(p) == id) else {
        return (StatusCode::NOT_FOUND, Json(json!({}))).into_response();
    };
    body["id"] = slot["id"].clone();
    *slot = body.clone();
    Json(body).into_response()
}

async fn delete_post(State(store): State<StubStore>, Path(id): Path<String>) -> Response {
    store.record(format!("DELETE /posts/{id}"));
    let mut inner = store.inner.lock().unwrap();
    let before = inner.posts.len();
    inner.posts.retain(|p| id_of(p) != id);
    if inner.posts.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({}))).into_response();
    }
    Json(json!({})).into_response()
}

fn app_for(base_url: Url, per_page: usize) -> Router {
    let repo = HttpPostRepo::new(base_url, Duration::from_secs(5)).unwrap();
    build_router(
        AppState::new(Arc::new(repo), per_page),
        Duration::from_secs(10),
    )
}

pub async fn create_test_app(store: &StubStore, per_page: usize) -> Router {
    app_for(store.spawn().await, per_page)
}

/// App wired to a port nobody listens on.
pub async fn create_unreachable_app(per_page: usize) -> Router {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    app_for(Url::parse(&format!("http://{addr}/")).unwrap(), per_page)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get_page(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}
