//! Data access layer: SQLite pool, migrations, and pass-through queries for
//! the topics, articles, and boards tables.

pub mod articles;
pub mod boards;
pub mod topics;
mod types;

pub use types::{Article, Board, BoardPatch, NewBoard, Topic};

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Signals a query that reported an error or returned no data. `context`
/// names the operation so the failure reads as "Get article by id: ...".
#[derive(Debug, thiserror::Error)]
pub enum DataAccessError {
    #[error("{context}: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{context}: no data returned")]
    NotFound { context: &'static str },
}

pub(crate) fn wrap<T>(
    result: Result<T, sqlx::Error>,
    context: &'static str,
) -> Result<T, DataAccessError> {
    result.map_err(|source| DataAccessError::Query { context, source })
}

/// Connection pool tuned for SQLite's single-writer model.
pub async fn create_pool(database_url: &str) -> anyhow::Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))
}

/// Apply pending embedded migrations.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    info!("Migrations complete");
    Ok(())
}
