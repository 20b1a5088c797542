//! End-to-end tests for the HTTP API.
//!
//! A throwaway axum server stands in for the published spreadsheet; the real
//! router is served on another ephemeral port and called with reqwest.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use sheet_ranker::api;
use sheet_ranker::config::Config;
use sheet_ranker::models::{RowsResponse, TopResponse};
use sheet_ranker::state::AppState;

const SHEET_CSV: &str = "\
name,magic_attack,physical_attack,value
Oak Staff,10,2,5
Ruby Wand,10,1,9
Rusty Sword,,30,1
Great Axe,0,45,20
Moon Orb,25,0,12
Bone Club,n/a,12,3
Frost Rod,18,4,7
";

/// Serve `router` on an ephemeral local port.
async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Fake sheet host. Counts hits so tests can check when it was not contacted.
async fn spawn_sheet_host(hits: Arc<AtomicUsize>) -> SocketAddr {
    let ok_hits = hits.clone();
    let router = Router::new()
        .route(
            "/sheet.csv",
            get(move || {
                let hits = ok_hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    SHEET_CSV
                }
            }),
        )
        .route(
            "/broken.csv",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "spreadsheet unavailable") }),
        );
    spawn(router).await
}

async fn spawn_app(csv_url: Option<String>) -> SocketAddr {
    let mut config = Config::default();
    config.sheet.csv_url = csv_url;
    config.sheet.timeout_secs = 5;
    let state = AppState::new(config).unwrap();
    spawn(api::router(state)).await
}

fn names(rows: &[sheet_ranker::models::Record]) -> Vec<&str> {
    rows.iter().map(|r| r["name"].as_str()).collect()
}

#[tokio::test]
async fn test_rows_returns_sheet_verbatim() {
    let hits = Arc::new(AtomicUsize::new(0));
    let sheet = spawn_sheet_host(hits.clone()).await;
    let app = spawn_app(Some(format!("http://{sheet}/sheet.csv"))).await;

    let resp = reqwest::get(format!("http://{app}/api/rows")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: RowsResponse = resp.json().await.unwrap();

    assert_eq!(body.rows.len(), 7);
    assert_eq!(names(&body.rows)[0], "Oak Staff");
    assert_eq!(body.rows[2]["magic_attack"], "");
    let keys: Vec<&str> = body.rows[0].keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "magic_attack", "physical_attack", "value"]);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_top5_magic() {
    let sheet = spawn_sheet_host(Arc::new(AtomicUsize::new(0))).await;
    let app = spawn_app(Some(format!("http://{sheet}/sheet.csv"))).await;

    let resp = reqwest::get(format!("http://{app}/api/top5?type=magic"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: TopResponse = resp.json().await.unwrap();

    assert_eq!(body.mode, "magic");
    assert_eq!(body.primary_field, "magic_attack");
    assert_eq!(body.secondary_field, "value");
    // Ruby Wand and Oak Staff tie on magic; value breaks it. Great Axe (0, value 20)
    // outranks the blank and n/a rows on the value tie-break.
    assert_eq!(
        names(&body.rows),
        vec!["Moon Orb", "Frost Rod", "Ruby Wand", "Oak Staff", "Great Axe"]
    );
}

#[tokio::test]
async fn test_top5_physical_and_value() {
    let sheet = spawn_sheet_host(Arc::new(AtomicUsize::new(0))).await;
    let app = spawn_app(Some(format!("http://{sheet}/sheet.csv"))).await;

    let body: TopResponse = reqwest::get(format!("http://{app}/api/top5?type=physical"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.primary_field, "physical_attack");
    assert_eq!(
        names(&body.rows),
        vec!["Great Axe", "Rusty Sword", "Bone Club", "Frost Rod", "Oak Staff"]
    );

    let body: TopResponse = reqwest::get(format!("http://{app}/api/top5?type=value"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.primary_field, "value");
    assert_eq!(body.secondary_field, "magic_attack");
    assert_eq!(
        names(&body.rows),
        vec!["Great Axe", "Moon Orb", "Ruby Wand", "Frost Rod", "Oak Staff"]
    );
}

#[tokio::test]
async fn test_invalid_mode_rejected_without_fetching() {
    let hits = Arc::new(AtomicUsize::new(0));
    let sheet = spawn_sheet_host(hits.clone()).await;
    let app = spawn_app(Some(format!("http://{sheet}/sheet.csv"))).await;

    for url in [
        format!("http://{app}/api/top5?type=fire"),
        format!("http://{app}/api/top5"),
        format!("http://{app}/api/top5?type=magic&type=value"),
    ] {
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{url}");
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json"),
            "{url}"
        );
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["code"], "INVALID_MODE");
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let sheet = spawn_sheet_host(Arc::new(AtomicUsize::new(0))).await;
    let app = spawn_app(Some(format!("http://{sheet}/broken.csv"))).await;

    let resp = reqwest::get(format!("http://{app}/api/rows")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_missing_source_is_not_configured() {
    let app = spawn_app(None).await;

    let resp = reqwest::get(format!("http://{app}/api/top5?type=value"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "NOT_CONFIGURED");
}

#[tokio::test]
async fn test_health_and_cors() {
    let app = spawn_app(None).await;

    let resp = reqwest::Client::new()
        .get(format!("http://{app}/health"))
        .header("Origin", "https://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(resp.text().await.unwrap(), "ok");
}
