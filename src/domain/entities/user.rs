//! Domain entity representing a user account.

use chrono::{DateTime, Utc};

/// Permissions granted to every newly registered user.
///
/// Add and view rights on categories, exercises and lifts.
pub const DEFAULT_PERMISSIONS: [&str; 6] = [
    "add_category",
    "view_category",
    "add_exercise",
    "view_exercise",
    "add_lift",
    "view_lift",
];

/// A registered account.
///
/// `password_hash` holds a bcrypt hash; the raw password is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Input data for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}
