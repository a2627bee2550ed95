//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the DDL in `bootstrap.rs` exactly.

diesel::table! {
    /// Tracked chat users and their XP and streak counters.
    users (user_id) {
        /// Primary key assigned by SQLite (rowid alias).
        user_id -> BigInt,
        /// Chat platform identifier; unique.
        slack_id -> Text,
        display_name -> Nullable<Text>,
        total_xp -> Nullable<BigInt>,
        current_streak -> Nullable<BigInt>,
        longest_streak -> Nullable<BigInt>,
        /// Stored as UTC without offset.
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    /// Work items authored by users. Only counted by this service.
    submissions (submission_id) {
        submission_id -> BigInt,
        author_id -> BigInt,
        created_at -> Timestamp,
    }
}

diesel::joinable!(submissions -> users (author_id));
diesel::allow_tables_to_appear_in_same_query!(submissions, users);
