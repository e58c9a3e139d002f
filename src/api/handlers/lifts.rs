//! Handlers for the per-user lift log.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::common::DetailResponse;
use crate::api::dto::lift::{CreateLiftRequest, LiftResponse};
use crate::api::extract::{AuthUser, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the requesting user's lifts, most recent date first.
///
/// # Endpoint
///
/// `GET /lifts/`
///
/// # Response
///
/// ```json
/// [
///   {"id": 7, "date": "2024-05-02", "exercise": 3, "repetitions": 5, "weight": "102.50"}
/// ]
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid session.
pub async fn list_lifts_handler(
    State(state): State<AppState>,
    AuthUser { user, .. }: AuthUser,
) -> Result<Json<Vec<LiftResponse>>, AppError> {
    let lifts = state.lift_service.list_for_user(user.id).await?;

    Ok(Json(lifts.into_iter().map(Into::into).collect()))
}

/// Logs a lift for the requesting user.
///
/// # Endpoint
///
/// `POST /lifts/`
///
/// # Request Body
///
/// ```json
/// {"exercise_id": 3, "date": "2024-05-02", "repetitions": 5, "weight": 102.5}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on malformed input.
/// Returns 401 Unauthorized without a valid session.
/// Returns 404 Not Found if the exercise does not exist.
pub async fn create_lift_handler(
    State(state): State<AppState>,
    AuthUser { user, .. }: AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateLiftRequest>,
) -> Result<(StatusCode, Json<DetailResponse>), AppError> {
    state
        .lift_service
        .create(payload.into_new_lift(user.id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DetailResponse::new("Lift created successfully.")),
    ))
}
