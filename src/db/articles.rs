//! Article queries. Read-only: ingestion writes these rows out of band.

use sqlx::SqlitePool;

use super::{wrap, Article, DataAccessError};

const COLUMNS: &str = "id, title, url, description, source, category, image_url, published_at";

pub async fn list_recent(pool: &SqlitePool, limit: u32) -> Result<Vec<Article>, DataAccessError> {
    wrap(
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {COLUMNS} FROM articles ORDER BY published_at DESC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(pool)
        .await,
        "Get recent articles",
    )
}

pub async fn list_by_topic(
    pool: &SqlitePool,
    topic_slug: &str,
    limit: u32,
) -> Result<Vec<Article>, DataAccessError> {
    wrap(
        sqlx::query_as::<_, Article>(&format!(
            "SELECT {COLUMNS} FROM articles
             WHERE category = ?
             ORDER BY published_at DESC
             LIMIT ?"
        ))
        .bind(topic_slug)
        .bind(limit)
        .fetch_all(pool)
        .await,
        "Get articles by topic",
    )
}

pub async fn get(pool: &SqlitePool, id: &str) -> Result<Article, DataAccessError> {
    let context = "Get article by ID";
    wrap(
        sqlx::query_as::<_, Article>(&format!("SELECT {COLUMNS} FROM articles WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await,
        context,
    )?
    .ok_or(DataAccessError::NotFound { context })
}
