//! Driving port for submission statistics.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Use-cases that read submission data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionsQuery: Send + Sync {
    /// Count submissions authored by `author_id`; unknown authors count zero.
    async fn count_for_author(&self, author_id: UserId) -> Result<u64, Error>;
}
