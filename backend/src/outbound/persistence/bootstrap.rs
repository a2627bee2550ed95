//! Idempotent schema creation run once at startup.
//!
//! The service owns a small, fixed schema, so tables and indexes are created
//! with `IF NOT EXISTS` statements instead of a migration history.

use diesel_async::SimpleAsyncConnection;
use tracing::info;

use super::pool::{DbPool, PoolError};

const SCHEMA_DDL: &str = "
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY NOT NULL,
    slack_id TEXT NOT NULL,
    display_name TEXT,
    total_xp INTEGER DEFAULT 0,
    current_streak INTEGER DEFAULT 0,
    longest_streak INTEGER DEFAULT 0,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
);
CREATE UNIQUE INDEX IF NOT EXISTS ix_users_slack_id ON users (slack_id);
CREATE TABLE IF NOT EXISTS submissions (
    submission_id INTEGER PRIMARY KEY NOT NULL,
    author_id INTEGER NOT NULL REFERENCES users (user_id),
    created_at TIMESTAMP NOT NULL
);
CREATE INDEX IF NOT EXISTS ix_submissions_author_id ON submissions (author_id);
";

/// Errors raised while creating the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No connection could be obtained.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A DDL statement failed.
    #[error("failed to create schema: {message}")]
    Ddl { message: String },
}

/// Create the `users` and `submissions` tables and their indexes when they
/// do not exist yet. Existing data is left untouched.
///
/// # Errors
///
/// Returns [`SchemaError`] when no connection is available or the DDL fails.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.get().await?;
    conn.batch_execute(SCHEMA_DDL)
        .await
        .map_err(|err| SchemaError::Ddl {
            message: err.to_string(),
        })?;
    info!("database schema ready");
    Ok(())
}
