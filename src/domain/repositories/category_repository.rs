//! Repository trait for categories.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for categories.
///
/// # Examples
///
/// See integration tests: `tests/repository_category.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a new category stamped with the current time.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Lists every category, newest first (`date_created DESC, id DESC`).
    async fn list(&self) -> Result<Vec<Category>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
