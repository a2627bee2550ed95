//! Submission statistics use-case.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{SubmissionPersistenceError, SubmissionRepository, SubmissionsQuery};
use crate::domain::{Error, UserId};

/// Domain service implementing [`SubmissionsQuery`].
///
/// No author existence check is made: an unknown author simply has no
/// submissions.
#[derive(Clone)]
pub struct SubmissionService<R> {
    repository: Arc<R>,
}

impl<R> SubmissionService<R> {
    /// Create a service over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: SubmissionPersistenceError) -> Error {
    match error {
        SubmissionPersistenceError::Connection { message } => {
            warn!(%message, "submission store unavailable");
            Error::service_unavailable(message)
        }
        SubmissionPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl<R> SubmissionsQuery for SubmissionService<R>
where
    R: SubmissionRepository,
{
    async fn count_for_author(&self, author_id: UserId) -> Result<u64, Error> {
        let count = self
            .repository
            .count_by_author(author_id)
            .await
            .map_err(map_persistence_error)?;
        debug!(%author_id, count, "counted submissions");
        Ok(count)
    }
}
