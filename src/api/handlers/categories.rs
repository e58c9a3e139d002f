//! Handler for category listing.

use axum::{Json, extract::State};

use crate::api::dto::category::CategoryResponse;
use crate::api::extract::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every category, newest first.
///
/// # Endpoint
///
/// `GET /categories/`
///
/// # Response
///
/// ```json
/// [
///   {"id": 2, "name": "Legs", "date_created": "2024-05-01T10:00:00Z"}
/// ]
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid session.
pub async fn list_categories_handler(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.category_service.list().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
