//! Topic queries.

use sqlx::SqlitePool;

use super::{wrap, DataAccessError, Topic};

pub async fn list_active(pool: &SqlitePool) -> Result<Vec<Topic>, DataAccessError> {
    wrap(
        sqlx::query_as::<_, Topic>(
            "SELECT id, slug, name, icon, color, is_active
             FROM topics
             WHERE is_active = 1
             ORDER BY name",
        )
        .fetch_all(pool)
        .await,
        "Get topics",
    )
}

pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Topic, DataAccessError> {
    let context = "Get topic by slug";
    wrap(
        sqlx::query_as::<_, Topic>(
            "SELECT id, slug, name, icon, color, is_active
             FROM topics
             WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await,
        context,
    )?
    .ok_or(DataAccessError::NotFound { context })
}
