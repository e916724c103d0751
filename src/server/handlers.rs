//! Request handlers. Every response uses the `{success, data}` /
//! `{success: false, error}` envelope the front-end expects.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::info;

use crate::agents::{self, ArticleInput};
use crate::db::{self, BoardPatch, DataAccessError, NewBoard};

use super::AppState;

const DEFAULT_ARTICLE_LIMIT: u32 = 20;

/// Error half of the envelope.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<DataAccessError> for ApiError {
    fn from(err: DataAccessError) -> Self {
        let status = match err {
            DataAccessError::NotFound { .. } => StatusCode::NOT_FOUND,
            DataAccessError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status, message: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "error": self.message }));
        (self.status, body).into_response()
    }
}

fn envelope<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

type ApiResult = Result<Json<Value>, ApiError>;

// ============================================================================
// Topics
// ============================================================================

pub async fn list_topics(State(state): State<AppState>) -> ApiResult {
    let topics = db::topics::list_active(&state.db).await?;
    Ok(envelope(topics))
}

// ============================================================================
// Articles
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ArticlesQuery {
    pub topic: Option<String>,
    pub limit: Option<u32>,
}

pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticlesQuery>,
) -> ApiResult {
    let limit = query.limit.unwrap_or(DEFAULT_ARTICLE_LIMIT).min(100);
    let articles = match query.topic {
        Some(topic) => db::articles::list_by_topic(&state.db, &topic, limit).await?,
        None => db::articles::list_recent(&state.db, limit).await?,
    };
    Ok(envelope(articles))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    let article = db::articles::get(&state.db, &id).await?;
    Ok(envelope(article))
}

// ============================================================================
// Analysis
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult {
    let (title, description) = match (request.title, request.description) {
        (Some(t), Some(d)) if !t.is_empty() && !d.is_empty() => (t, d),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: title, description",
            ));
        }
    };

    let article = ArticleInput { title, description, content: request.content };

    let started = Instant::now();
    let analysis = agents::analyze_article(&state.deepseek, &article).await;
    info!(
        title = %article.title,
        elapsed_ms = started.elapsed().as_millis() as u64,
        topic = %analysis.topic,
        "article analysis complete"
    );

    Ok(envelope(analysis))
}

// ============================================================================
// Boards
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BoardsQuery {
    pub user_id: String,
}

pub async fn list_boards(
    State(state): State<AppState>,
    Query(query): Query<BoardsQuery>,
) -> ApiResult {
    let boards = db::boards::list_for_user(&state.db, &query.user_id).await?;
    Ok(envelope(boards))
}

pub async fn create_board(
    State(state): State<AppState>,
    Json(board): Json<NewBoard>,
) -> ApiResult {
    if board.name.is_empty() {
        return Err(ApiError::bad_request("Board name must not be empty"));
    }
    let created = db::boards::create(&state.db, board).await?;
    Ok(envelope(created))
}

pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<BoardPatch>,
) -> ApiResult {
    let updated = db::boards::update(&state.db, &id, patch).await?;
    Ok(envelope(updated))
}

pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult {
    db::boards::delete(&state.db, &id).await?;
    Ok(envelope(json!({ "deleted": id })))
}
