mod common;

use serde_json::json;
use vk_link::cli;

async fn run_cli(base_url: &str, token: Option<&str>, url: &str) -> String {
    let config = common::test_config(base_url, token);
    let service = common::create_service(&config);

    let mut out = Vec::new();
    cli::run(&service, &config, url, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_long_link_is_shortened() {
    let stub = common::spawn_stub(
        json!({ "response": { "short_url": "https://vk.cc/abc123" } }),
        json!({ "error": { "error_code": 100, "error_msg": "unexpected" } }),
    )
    .await;

    let output = run_cli(&stub.base_url, Some(common::TOKEN), "https://example.com/page").await;

    assert!(output.contains("vk.cc/abc123"));
    assert_eq!(stub.hits(), 1);

    let queries = stub.queries();
    let (method, params) = &queries[0];
    assert_eq!(method, "utils.getShortLink");
    assert_eq!(params["access_token"], common::TOKEN);
    assert_eq!(params["v"], "5.199");
    assert_eq!(params["url"], "https://example.com/page");
}

#[tokio::test]
async fn test_short_link_reports_clicks() {
    let stub = common::spawn_stub(
        json!({ "response": { "short_url": "https://vk.cc/unused" } }),
        json!({ "response": { "stats": [{ "views": 3 }, { "views": 7 }] } }),
    )
    .await;

    let output = run_cli(&stub.base_url, Some(common::TOKEN), "https://vk.cc/abc123").await;

    assert!(output.contains("10"));
    assert!(!output.contains("unused"));
    assert_eq!(stub.hits(), 1);

    let queries = stub.queries();
    let (method, params) = &queries[0];
    assert_eq!(method, "utils.getLinkStats");
    assert_eq!(params["key"], "abc123");
    assert_eq!(params["interval"], "forever");
}

#[tokio::test]
async fn test_short_link_with_no_stats_reports_zero() {
    let stub = common::spawn_stub(
        json!({ "response": { "short_url": "https://vk.cc/unused" } }),
        json!({ "response": { "stats": [] } }),
    )
    .await;

    let output = run_cli(&stub.base_url, Some(common::TOKEN), "https://vk.cc/abc123").await;

    assert!(output.contains("Clicks:"));
    assert!(output.trim_end().ends_with('0'));
}

#[tokio::test]
async fn test_remote_error_is_printed() {
    let stub = common::spawn_stub(
        json!({ "error": { "error_code": 5, "error_msg": "invalid token" } }),
        json!({ "error": { "error_code": 5, "error_msg": "invalid token" } }),
    )
    .await;

    let output = run_cli(&stub.base_url, Some("bad"), "https://example.com/page").await;

    assert!(output.contains("Error:"));
    assert!(output.contains("invalid token"));
}

#[tokio::test]
async fn test_unknown_short_link_falls_back_to_shortening() {
    let stub = common::spawn_stub(
        json!({ "response": { "short_url": "https://vk.cc/new777" } }),
        json!({ "error": { "error_code": 100, "error_msg": "invalid key" } }),
    )
    .await;

    let output = run_cli(&stub.base_url, Some(common::TOKEN), "https://vk.cc/nope").await;

    assert!(output.contains("vk.cc/new777"));
    assert_eq!(stub.hits(), 2);
}

#[tokio::test]
async fn test_missing_token_makes_no_network_call() {
    let stub = common::spawn_stub(
        json!({ "response": { "short_url": "https://vk.cc/abc123" } }),
        json!({ "response": { "stats": [] } }),
    )
    .await;

    let output = run_cli(&stub.base_url, None, "https://example.com/page").await;

    assert!(output.contains("VK_SERVICE_TOKEN is not set"));
    assert_eq!(stub.hits(), 0);
}
