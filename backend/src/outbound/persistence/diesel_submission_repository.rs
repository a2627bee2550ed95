//! SQLite-backed `SubmissionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::UserId;
use crate::domain::ports::{SubmissionPersistenceError, SubmissionRepository};

use super::pool::DbPool;
use super::schema::submissions;
use super::sqlite_error_mapping::{CONNECTION_LOST, Failure, QUERY_FAILED, classify};

/// Diesel-backed implementation of the [`SubmissionRepository`] port.
#[derive(Clone)]
pub struct DieselSubmissionRepository {
    pool: DbPool,
}

impl DieselSubmissionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for DieselSubmissionRepository {
    async fn count_by_author(&self, author_id: UserId) -> Result<u64, SubmissionPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| SubmissionPersistenceError::connection(err.to_string()))?;

        let count: i64 = submissions::table
            .filter(submissions::author_id.eq(author_id.get()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| match classify(&err) {
                Failure::Connection => SubmissionPersistenceError::connection(CONNECTION_LOST),
                Failure::UniqueViolation | Failure::Query => {
                    SubmissionPersistenceError::query(QUERY_FAILED)
                }
            })?;

        u64::try_from(count)
            .map_err(|_| SubmissionPersistenceError::query("negative submission count"))
    }
}
