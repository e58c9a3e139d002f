//! Domain entity representing an exercise category.

use chrono::{DateTime, Utc};

/// A named grouping visible to every authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
}

/// Input data for creating a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}
