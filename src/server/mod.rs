//! HTTP API for the news front-end.
//!
//! - GET  /api/topics          - active topics
//! - GET  /api/articles        - recent or per-topic articles
//! - GET  /api/articles/{id}   - single article
//! - POST /api/analyze         - run the analysis pipeline on one article
//! - CRUD /api/boards          - user boards

mod handlers;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::NewtsConfig;
use crate::deepseek::DeepSeekClient;

/// Shared handler state. The DeepSeek client is injected here rather than
/// living in a global.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub deepseek: Arc<DeepSeekClient>,
}

pub fn router(state: AppState, config: &NewtsConfig) -> Router {
    let allow_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("*"));

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/topics", get(handlers::list_topics))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/{id}", get(handlers::get_article))
        .route("/api/analyze", post(handlers::analyze))
        .route(
            "/api/boards",
            get(handlers::list_boards).post(handlers::create_board),
        )
        .route(
            "/api/boards/{id}",
            patch(handlers::update_board).delete(handlers::delete_board),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
