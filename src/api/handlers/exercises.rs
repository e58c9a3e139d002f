//! Handlers for the shared exercise catalogue.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::common::DetailResponse;
use crate::api::dto::exercise::{CreateExerciseRequest, ExerciseResponse};
use crate::api::extract::{AuthUser, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every exercise, newest first.
///
/// # Endpoint
///
/// `GET /exercises/`
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid session.
pub async fn list_exercises_handler(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<ExerciseResponse>>, AppError> {
    let exercises = state.exercise_service.list().await?;

    Ok(Json(exercises.into_iter().map(Into::into).collect()))
}

/// Adds an exercise created by the requesting user.
///
/// # Endpoint
///
/// `POST /exercises/`
///
/// # Request Body
///
/// ```json
/// {"name": "Front squat"}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the name is empty or too long.
/// Returns 401 Unauthorized without a valid session.
pub async fn create_exercise_handler(
    State(state): State<AppState>,
    AuthUser { user, .. }: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateExerciseRequest>,
) -> Result<(StatusCode, Json<DetailResponse>), AppError> {
    state.exercise_service.create(payload.name, &user).await?;

    Ok((
        StatusCode::CREATED,
        Json(DetailResponse::new("Exercise created successfully.")),
    ))
}
