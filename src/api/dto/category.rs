//! DTOs for category endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Category;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            date_created: category.date_created,
        }
    }
}
