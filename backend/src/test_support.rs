//! Test utilities for the backend crate.
//!
//! Only compiled for unit tests; integration tests under `tests/` carry their
//! own helpers in `tests/support`.

use std::sync::Mutex;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{SlackId, User, UserId};

/// Clock whose reading only changes when a test advances it.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Fixed instant used as "now" across unit tests.
pub fn fixed_now() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single() {
        Some(now) => now,
        None => panic!("fixed timestamp must be valid"),
    }
}

/// Stored user with non-zero counters, created and last updated at
/// [`fixed_now`].
pub fn sample_user(id: i64, slack_id: &str) -> User {
    User {
        id: UserId::new(id),
        slack_id: SlackId::new(slack_id),
        display_name: Some(format!("user {id}")),
        total_xp: Some(120),
        current_streak: Some(3),
        longest_streak: Some(7),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub mod openapi {
    //! OpenAPI schema traversal helpers.

    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::{Object, Schema};

    /// Extract an `Object` schema, panicking with a diagnostic otherwise.
    pub fn unwrap_object_schema<'a>(schema: &'a RefOr<Schema>, name: &str) -> &'a Object {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj,
            RefOr::Ref(reference) => panic!(
                "schema '{name}' is a $ref to '{}'; resolve the reference first",
                reference.ref_location
            ),
            _ => panic!("schema '{name}' is not an Object"),
        }
    }
}
