//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Identity provider accounts. Never exported.
    accounts (id) {
        id -> Uuid,
        /// Lower-cased, unique.
        email -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Text,
        display_name -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Application user records, one per account.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        username -> Varchar,
        mode -> Varchar,
        /// Consecutive-day sleep streak; written only with the sleep log.
        streak_count -> Int4,
        last_sleep_date -> Nullable<Date>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only sleep entries.
    sleep_logs (id) {
        id -> Uuid,
        user_id -> Uuid,
        hours -> Float8,
        quality -> Int2,
        mood -> Varchar,
        entry_date -> Date,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only gratitude notes.
    gratitude_logs (id) {
        id -> Uuid,
        user_id -> Uuid,
        content -> Text,
        entry_date -> Date,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(accounts, users, sleep_logs, gratitude_logs);
