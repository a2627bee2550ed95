//! Shared helpers for integration tests running against SQLite files.

use chrono::Utc;
use diesel::sql_types::{BigInt, Timestamp};
use diesel_async::RunQueryDsl;
use tempfile::TempDir;
use xp_tracker::outbound::persistence::{DbPool, PoolConfig, ensure_schema};

/// Pool over a bootstrapped database inside a private temporary directory.
///
/// The directory, and with it the database, is removed on drop.
pub struct TestDb {
    pub pool: DbPool,
    pub path: String,
    _dir: TempDir,
}

impl TestDb {
    /// Create an empty database with the service schema.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("xp.db").to_string_lossy().into_owned();
        let pool = DbPool::new(
            PoolConfig::new(path.clone())
                .with_max_size(4)
                .with_min_idle(Some(1)),
        )
        .await
        .expect("pool builds");
        ensure_schema(&pool).await.expect("schema created");
        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    /// Record a submission authored by `author_id`.
    ///
    /// The service never writes submissions itself, so tests insert them
    /// directly.
    pub async fn record_submission(&self, author_id: i64) {
        let mut conn = self.pool.get().await.expect("connection");
        diesel::sql_query("INSERT INTO submissions (author_id, created_at) VALUES (?, ?)")
            .bind::<BigInt, _>(author_id)
            .bind::<Timestamp, _>(Utc::now().naive_utc())
            .execute(&mut conn)
            .await
            .expect("submission recorded");
    }
}
