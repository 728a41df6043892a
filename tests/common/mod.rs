#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vk_link::prelude::*;

pub const TOKEN: &str = "test-service-token";

#[derive(Clone)]
struct StubState {
    short_link: Arc<Value>,
    link_stats: Arc<Value>,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

/// In-process stand-in for `https://api.vk.com/method/`.
pub struct StubVk {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

impl StubVk {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Method names and query parameters of every request, in order.
    pub fn queries(&self) -> Vec<(String, HashMap<String, String>)> {
        self.queries.lock().unwrap().clone()
    }
}

fn record(state: &StubState, method: &str, query: HashMap<String, String>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .queries
        .lock()
        .unwrap()
        .push((method.to_string(), query));
}

async fn short_link_handler(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    record(&state, "utils.getShortLink", query);
    Json((*state.short_link).clone())
}

async fn link_stats_handler(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    record(&state, "utils.getLinkStats", query);
    Json((*state.link_stats).clone())
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/method/")
}

/// Starts a stub answering each method with a fixed JSON envelope.
pub async fn spawn_stub(short_link: Value, link_stats: Value) -> StubVk {
    let state = StubState {
        short_link: Arc::new(short_link),
        link_stats: Arc::new(link_stats),
        hits: Arc::new(AtomicUsize::new(0)),
        queries: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/method/utils.getShortLink", get(short_link_handler))
        .route("/method/utils.getLinkStats", get(link_stats_handler))
        .with_state(state.clone());

    StubVk {
        base_url: serve(app).await,
        hits: state.hits,
        queries: state.queries,
    }
}

/// Starts a stub answering every request with `status` and a raw body.
pub async fn spawn_raw_stub(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().fallback(move || async move { (status, body) });
    serve(app).await
}

pub fn test_config(base_url: &str, token: Option<&str>) -> Config {
    Config {
        credential: token.and_then(Credential::new),
        api_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..Config::default()
    }
}

pub fn create_service(config: &Config) -> LinkService<ReqwestTransport> {
    let transport = ReqwestTransport::new(&config.api_base_url, Duration::from_secs(5)).unwrap();
    LinkService::new(Arc::new(transport), config.api_settings())
}
