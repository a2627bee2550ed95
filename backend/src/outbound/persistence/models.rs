//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub slack_id: String,
    pub display_name: Option<String>,
    pub total_xp: Option<i64>,
    pub current_streak: Option<i64>,
    pub longest_streak: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub slack_id: &'a str,
    pub display_name: Option<&'a str>,
    pub total_xp: Option<i64>,
    pub current_streak: Option<i64>,
    pub longest_streak: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for the mutable user columns.
///
/// `None` writes NULL rather than skipping the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserUpdate<'a> {
    pub display_name: Option<&'a str>,
    pub total_xp: Option<i64>,
    pub current_streak: Option<i64>,
    pub longest_streak: Option<i64>,
    pub updated_at: NaiveDateTime,
}
