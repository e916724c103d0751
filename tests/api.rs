//! HTTP API surface: routes, envelope shape, and status codes.

use axum::{routing::post, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use newts::config::NewtsConfig;
use newts::db;
use newts::deepseek::DeepSeekClient;
use newts::server::{self, AppState};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Full app wired to a scratch database and a chat endpoint that always
/// fails, so analysis exercises the fallback path.
async fn spawn_app() -> (tempfile::TempDir, String) {
    let llm = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "down") }),
    );
    let llm_base = spawn(llm).await;

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}?mode=rwc", dir.path().join("api-test.db").display());
    let pool = db::create_pool(&url).await.unwrap();
    db::run_migrations(&pool).await.unwrap();

    sqlx::query("INSERT INTO topics (id, slug, name, is_active) VALUES ('t1', 'ai', 'Artificial Intelligence', 1)")
        .execute(&pool)
        .await
        .unwrap();

    let config = NewtsConfig {
        deepseek_api_key: "test-key".into(),
        deepseek_base_url: format!("{}/v1", llm_base),
        deepseek_model: "deepseek-chat".into(),
        rate_limit_delay_ms: 0,
        request_timeout_secs: 5,
        database_url: url,
        host: "127.0.0.1".into(),
        port: 0,
        cors_origin: "http://localhost:3000".into(),
        log_level: "info".into(),
    };
    let state = AppState {
        db: pool,
        deepseek: Arc::new(DeepSeekClient::new(&config)),
    };
    let base = spawn(server::router(state, &config)).await;
    (dir, base)
}

#[tokio::test]
async fn topics_come_wrapped_in_success_envelope() {
    let (_dir, base) = spawn_app().await;

    let body: Value = reqwest::get(format!("{}/api/topics", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["slug"], "ai");
}

#[tokio::test]
async fn missing_article_is_404_with_error_envelope() {
    let (_dir, base) = spawn_app().await;

    let response = reqwest::get(format!("{}/api/articles/ghost", base)).await.unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Get article by ID"));
}

#[tokio::test]
async fn analyze_requires_title_and_description() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/analyze", base))
        .json(&json!({ "title": "Only a title" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("title, description"));
}

#[tokio::test]
async fn analyze_degrades_to_neutral_record_when_model_down() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/analyze", base))
        .json(&json!({
            "title": "Rate decision",
            "description": "Central bank holds rates steady."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["strategic_impact"], 50.0);
    assert_eq!(data["momentum"], "stable");
    assert_eq!(data["topic"], "General");
    assert_eq!(data["summary"], "Central bank holds rates steady.");
}

#[tokio::test]
async fn boards_crud_over_http() {
    let (_dir, base) = spawn_app().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/api/boards", base))
        .json(&json!({ "user_id": "u1", "name": "Watchlist", "color": "#10b981" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["success"], true);
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let patched: Value = client
        .patch(format!("{}/api/boards/{}", base, id))
        .json(&json!({ "name": "Morning scan" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(patched["data"]["name"], "Morning scan");
    assert_eq!(patched["data"]["color"], "#10b981");

    let listed: Value = reqwest::get(format!("{}/api/boards?user_id=u1", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let deleted = client
        .delete(format!("{}/api/boards/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), 200);

    let listed: Value = reqwest::get(format!("{}/api/boards?user_id=u1", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed["data"].as_array().unwrap().is_empty());
}
