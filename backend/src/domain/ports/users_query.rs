//! Driving port for user lookups.
//!
//! Inbound adapters use this port to fetch users without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, SlackId, User, UserId};

/// Use-cases that read users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch a user by internal id, failing with not-found when absent.
    async fn user_by_id(&self, id: UserId) -> Result<User, Error>;

    /// Fetch a user by Slack id, failing with not-found when absent.
    async fn user_by_slack_id(&self, slack_id: &SlackId) -> Result<User, Error>;
}
