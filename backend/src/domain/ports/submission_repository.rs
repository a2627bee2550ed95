//! Port abstraction for reading submission events.
use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by submission repository adapters.
    pub enum SubmissionPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "submission repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "submission repository query failed: {message}",
    }
}

/// Read access to submissions recorded by an external collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Number of submissions whose author is `author_id`.
    async fn count_by_author(&self, author_id: UserId) -> Result<u64, SubmissionPersistenceError>;
}
