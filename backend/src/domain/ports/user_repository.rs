//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, SlackId, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The store's uniqueness constraint on `slack_id` rejected an insert.
        DuplicateSlackId { slack_id: String } => "slack id {slack_id} is already registered",
    }
}

/// Durable storage for [`User`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored record with its assigned id.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by primary key.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the first user carrying `slack_id`.
    async fn find_by_slack_id(
        &self,
        slack_id: &SlackId,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Persist the mutable fields of `user`.
    ///
    /// Returns `None` when no row with `user.id` exists.
    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError>;
}
