//! Category service.

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Longest category name accepted.
pub const MAX_CATEGORY_NAME_LEN: usize = 255;

/// Service for the shared category list.
///
/// Categories are read over HTTP and created from the admin CLI.
pub struct CategoryService<R: CategoryRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CategoryRepository + ?Sized> CategoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every category, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// Creates a category.
    ///
    /// Surrounding whitespace is trimmed from the name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty or too long.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, name: &str) -> Result<Category, AppError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Category name must not be empty."));
        }
        if name.chars().count() > MAX_CATEGORY_NAME_LEN {
            return Err(AppError::bad_request(format!(
                "Category name must be at most {MAX_CATEGORY_NAME_LEN} characters."
            )));
        }

        let category = self
            .repository
            .create(NewCategory {
                name: name.to_string(),
            })
            .await?;

        tracing::info!(category_id = category.id, "Category created");

        Ok(category)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
