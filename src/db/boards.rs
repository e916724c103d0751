//! Board queries.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{wrap, Board, BoardPatch, DataAccessError, NewBoard};

const COLUMNS: &str = "id, user_id, name, description, icon, color, article_count, created_at";

pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Board>, DataAccessError> {
    wrap(
        sqlx::query_as::<_, Board>(&format!(
            "SELECT {COLUMNS} FROM boards WHERE user_id = ? ORDER BY created_at"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await,
        "Get boards by user",
    )
}

pub async fn create(pool: &SqlitePool, board: NewBoard) -> Result<Board, DataAccessError> {
    let created = Board {
        id: Uuid::new_v4().to_string(),
        user_id: board.user_id,
        name: board.name,
        description: board.description,
        icon: board.icon,
        color: board.color,
        article_count: 0,
        created_at: Utc::now(),
    };

    wrap(
        sqlx::query(
            "INSERT INTO boards (id, user_id, name, description, icon, color, article_count, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&created.id)
        .bind(&created.user_id)
        .bind(&created.name)
        .bind(&created.description)
        .bind(&created.icon)
        .bind(&created.color)
        .bind(created.article_count)
        .bind(created.created_at)
        .execute(pool)
        .await,
        "Create board",
    )?;

    Ok(created)
}

/// Apply a partial update and return the fresh row.
pub async fn update(
    pool: &SqlitePool,
    id: &str,
    patch: BoardPatch,
) -> Result<Board, DataAccessError> {
    let context = "Update board";
    let result = wrap(
        sqlx::query(
            "UPDATE boards SET
                name = COALESCE(?, name),
                description = COALESCE(?, description),
                icon = COALESCE(?, icon),
                color = COALESCE(?, color)
             WHERE id = ?",
        )
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(&patch.icon)
        .bind(&patch.color)
        .bind(id)
        .execute(pool)
        .await,
        context,
    )?;

    if result.rows_affected() == 0 {
        return Err(DataAccessError::NotFound { context });
    }

    wrap(
        sqlx::query_as::<_, Board>(&format!("SELECT {COLUMNS} FROM boards WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await,
        context,
    )?
    .ok_or(DataAccessError::NotFound { context })
}

pub async fn delete(pool: &SqlitePool, id: &str) -> Result<(), DataAccessError> {
    let context = "Delete board";
    let result = wrap(
        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await,
        context,
    )?;

    if result.rows_affected() == 0 {
        return Err(DataAccessError::NotFound { context });
    }
    Ok(())
}
