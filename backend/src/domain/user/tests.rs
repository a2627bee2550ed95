//! Tests for user patching and timestamp refresh.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn user(created_at: DateTime<Utc>) -> User {
    User {
        id: UserId::new(7),
        slack_id: SlackId::new("U07"),
        display_name: Some("Ada".to_owned()),
        total_xp: Some(10),
        current_streak: Some(2),
        longest_streak: Some(5),
        created_at,
        updated_at: created_at,
    }
}

#[rstest]
fn apply_only_touches_present_fields(mut user: User) {
    let before = user.clone();
    UserPatch {
        total_xp: Some(Some(50)),
        ..UserPatch::default()
    }
    .apply(&mut user);

    assert_eq!(user.total_xp, Some(50));
    assert_eq!(user.current_streak, before.current_streak);
    assert_eq!(user.longest_streak, before.longest_streak);
    assert_eq!(user.display_name, before.display_name);
}

#[rstest]
fn apply_clears_display_name_on_explicit_null(mut user: User) {
    UserPatch {
        display_name: Some(None),
        ..UserPatch::default()
    }
    .apply(&mut user);

    assert_eq!(user.display_name, None);
}

#[rstest]
fn apply_stores_null_counters(mut user: User) {
    let before = user.clone();
    UserPatch {
        current_streak: Some(None),
        ..UserPatch::default()
    }
    .apply(&mut user);

    assert_eq!(user.current_streak, None);
    assert_eq!(user.total_xp, before.total_xp);
    assert_eq!(user.longest_streak, before.longest_streak);
}

#[rstest]
fn apply_overwrites_every_field(mut user: User) {
    UserPatch {
        total_xp: Some(Some(1)),
        current_streak: Some(Some(3)),
        longest_streak: Some(Some(9)),
        display_name: Some(Some("Grace".to_owned())),
    }
    .apply(&mut user);

    assert_eq!(user.total_xp, Some(1));
    assert_eq!(user.current_streak, Some(3));
    assert_eq!(user.longest_streak, Some(9));
    assert_eq!(user.display_name.as_deref(), Some("Grace"));
}

#[rstest]
fn empty_patch_changes_nothing(mut user: User) {
    let before = user.clone();
    let patch = UserPatch::default();
    assert!(patch.is_empty());
    patch.apply(&mut user);
    assert_eq!(user, before);
}

#[rstest]
fn field_names_lists_present_fields() {
    let patch = UserPatch {
        longest_streak: Some(Some(4)),
        display_name: Some(None),
        ..UserPatch::default()
    };
    assert_eq!(patch.field_names(), vec!["longest_streak", "display_name"]);
    assert!(!patch.is_empty());
}

#[rstest]
fn touch_uses_clock_when_it_moved_forward(mut user: User, created_at: DateTime<Utc>) {
    let later = created_at + TimeDelta::seconds(30);
    user.touch(later);
    assert_eq!(user.updated_at, later);
    assert_eq!(user.created_at, created_at);
}

#[rstest]
#[case(TimeDelta::zero())]
#[case(TimeDelta::seconds(-5))]
fn touch_never_moves_backwards(
    mut user: User,
    created_at: DateTime<Utc>,
    #[case] offset: TimeDelta,
) {
    user.touch(created_at + offset);
    assert!(user.updated_at > created_at);
    assert_eq!(user.updated_at, created_at + TimeDelta::microseconds(1));
}

#[rstest]
fn new_user_takes_request_fields(created_at: DateTime<Utc>) {
    let new_user = NewUser::new(
        CreateUserRequest {
            slack_id: SlackId::new("U99"),
            display_name: None,
        },
        created_at,
    );
    assert_eq!(new_user.slack_id.as_str(), "U99");
    assert_eq!(new_user.display_name, None);
    assert_eq!(new_user.created_at, created_at);
}

#[test]
fn identifiers_serialise_transparently() {
    assert_eq!(serde_json::to_string(&UserId::new(42)).expect("json"), "42");
    assert_eq!(
        serde_json::to_string(&SlackId::new("U1")).expect("json"),
        "\"U1\""
    );
}
