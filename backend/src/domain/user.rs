//! User aggregate, its identifiers, and the partial-update patch.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// System-assigned user identifier (the store's primary key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External identifier issued by the chat platform.
///
/// Treated as an opaque string; uniqueness is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlackId(String);

impl SlackId {
    /// Wrap a raw Slack identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SlackId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SlackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SlackId> for String {
    fn from(value: SlackId) -> Self {
        value.0
    }
}

/// Tracked user with XP and streak counters.
///
/// Counters start at zero but may be cleared to `None` by an explicit null
/// in a patch.
///
/// ## Invariants
/// - `created_at` never changes after insertion.
/// - `updated_at >= created_at`, and every update moves it strictly forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub slack_id: SlackId,
    pub display_name: Option<String>,
    pub total_xp: Option<i64>,
    pub current_streak: Option<i64>,
    pub longest_streak: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Refresh `updated_at` to `now`.
    ///
    /// When `now` does not lie after the stored value (coarse or skewed
    /// clocks), the timestamp advances by one microsecond instead so updates
    /// remain observable.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use xp_tracker::domain::{SlackId, User, UserId};
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    /// let mut user = User {
    ///     id: UserId::new(1),
    ///     slack_id: SlackId::new("U123"),
    ///     display_name: None,
    ///     total_xp: Some(0),
    ///     current_streak: Some(0),
    ///     longest_streak: Some(0),
    ///     created_at: at,
    ///     updated_at: at,
    /// };
    /// user.touch(at);
    /// assert_eq!(user.updated_at, at + TimeDelta::microseconds(1));
    /// ```
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + TimeDelta::microseconds(1);
        self.updated_at = now.max(floor);
    }
}

/// Input accepted by the create-user use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub slack_id: SlackId,
    pub display_name: Option<String>,
}

/// User record about to be inserted; counters start at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub slack_id: SlackId,
    pub display_name: Option<String>,
    /// Used for both `created_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Build an insertable user stamped with `now`.
    pub fn new(request: CreateUserRequest, now: DateTime<Utc>) -> Self {
        Self {
            slack_id: request.slack_id,
            display_name: request.display_name,
            created_at: now,
        }
    }
}

/// Partial update for a [`User`].
///
/// The outer `None` means "leave untouched"; `Some(None)` stores null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub total_xp: Option<Option<i64>>,
    pub current_streak: Option<Option<i64>>,
    pub longest_streak: Option<Option<i64>>,
    pub display_name: Option<Option<String>>,
}

impl UserPatch {
    /// Whether the patch carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Names of the fields this patch will overwrite, in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("total_xp", self.total_xp.is_some()),
            ("current_streak", self.current_streak.is_some()),
            ("longest_streak", self.longest_streak.is_some()),
            ("display_name", self.display_name.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    /// Overwrite the fields present in the patch; leave the rest untouched.
    pub fn apply(self, user: &mut User) {
        let Self {
            total_xp,
            current_streak,
            longest_streak,
            display_name,
        } = self;

        if let Some(total_xp) = total_xp {
            user.total_xp = total_xp;
        }
        if let Some(current_streak) = current_streak {
            user.current_streak = current_streak;
        }
        if let Some(longest_streak) = longest_streak {
            user.longest_streak = longest_streak;
        }
        if let Some(display_name) = display_name {
            user.display_name = display_name;
        }
    }
}

#[cfg(test)]
mod tests;
