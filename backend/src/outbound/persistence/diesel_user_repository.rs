//! SQLite-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, SlackId, User, UserId};

use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;
use super::sqlite_error_mapping::{CONNECTION_LOST, Failure, QUERY_FAILED, classify};

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.to_string())
}

/// Only inserts can collide on `slack_id`; `inserting` names the candidate.
fn map_write_error(
    error: &diesel::result::Error,
    inserting: Option<&SlackId>,
) -> UserPersistenceError {
    match (classify(error), inserting) {
        (Failure::UniqueViolation, Some(slack_id)) => {
            UserPersistenceError::duplicate_slack_id(slack_id.as_str())
        }
        (Failure::Connection, _) => UserPersistenceError::connection(CONNECTION_LOST),
        _ => UserPersistenceError::query(QUERY_FAILED),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_write_error(&error, None)
}

fn row_to_user(row: UserRow) -> User {
    User {
        id: UserId::new(row.user_id),
        slack_id: SlackId::new(row.slack_id),
        display_name: row.display_name,
        total_xp: row.total_xp,
        current_streak: row.current_streak,
        longest_streak: row.longest_streak,
        created_at: row.created_at.and_utc(),
        updated_at: row.updated_at.and_utc(),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let stamp = user.created_at.naive_utc();
        let row = NewUserRow {
            slack_id: user.slack_id.as_str(),
            display_name: user.display_name.as_deref(),
            total_xp: Some(0),
            current_streak: Some(0),
            longest_streak: Some(0),
            created_at: stamp,
            updated_at: stamp,
        };

        diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_user)
            .map_err(|err| map_write_error(&err, Some(&user.slack_id)))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_user))
            .map_err(map_diesel_error)
    }

    async fn find_by_slack_id(
        &self,
        slack_id: &SlackId,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::slack_id.eq(slack_id.as_str()))
            .order(users::user_id.asc())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_user))
            .map_err(map_diesel_error)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = UserUpdate {
            display_name: user.display_name.as_deref(),
            total_xp: user.total_xp,
            current_streak: user.current_streak,
            longest_streak: user.longest_streak,
            updated_at: user.updated_at.naive_utc(),
        };

        diesel::update(users::table.find(user.id.get()))
            .set(&changes)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(row_to_user))
            .map_err(map_diesel_error)
    }
}
