//! User use-cases: create, look up and patch users.
//!
//! The service owns the behaviour the HTTP surface promises: zeroed counters
//! and matching timestamps on creation, not-found errors for missing users,
//! exclude-unset patch semantics, and a strictly advancing `updated_at`.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{CreateUserRequest, Error, NewUser, SlackId, User, UserId, UserPatch};

const USER_NOT_FOUND: &str = "User not found";

/// Domain service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserService<R> {
    /// Create a service over `repository`, stamping records with `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use xp_tracker::domain::UserService;
    /// # use xp_tracker::outbound::persistence::{DbPool, PoolConfig, DieselUserRepository};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("./local.db")).await?;
    /// let service = UserService::new(
    ///     Arc::new(DieselUserRepository::new(pool)),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn user_not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user store unavailable");
            Error::service_unavailable(message)
        }
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::DuplicateSlackId { slack_id } => Error::conflict(format!(
            "a user with slack id {slack_id} already exists"
        ))
        .with_details(json!({ "field": "slack_id", "value": slack_id })),
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let new_user = NewUser::new(request, self.clock.utc());
        let user = self
            .repository
            .insert(&new_user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id, slack_id = %user.slack_id, "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)?;

        let fields = patch.field_names();
        patch.apply(&mut user);
        user.touch(self.clock.utc());

        // The row can disappear between read and write only if something
        // outside this service deletes it.
        let updated = self
            .repository
            .update(&user)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)?;
        info!(user_id = %id, ?fields, "user updated");
        Ok(updated)
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn user_by_id(&self, id: UserId) -> Result<User, Error> {
        debug!(user_id = %id, "looking up user by id");
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)
    }

    async fn user_by_slack_id(&self, slack_id: &SlackId) -> Result<User, Error> {
        debug!(%slack_id, "looking up user by slack id");
        self.repository
            .find_by_slack_id(slack_id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(user_not_found)
    }
}
