//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{CreateUserRequest, Error, User, UserId, UserPatch};

/// Use-cases that create or change users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a new user with zeroed counters.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Apply `patch` to the user identified by `id` and refresh `updated_at`.
    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error>;
}
