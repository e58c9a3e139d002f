//! Handlers for registration, the current user and session management.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse},
};

use crate::api::dto::common::DetailResponse;
use crate::api::dto::user::{ChangePasswordRequest, LoginRequest, RegisterRequest, UserResponse};
use crate::api::extract::{AuthUser, RequestContext, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /users/`
///
/// # Request Body
///
/// ```json
/// {"username": "ann", "password": "...", "first_name": "Ann", "last_name": "Lee"}
/// ```
///
/// `first_name` and `last_name` are optional.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the username is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<DetailResponse>), AppError> {
    state.user_service.register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(DetailResponse::new("Success."))))
}

/// Returns the authenticated user's profile.
///
/// # Endpoint
///
/// `GET /users/current/`
///
/// # Errors
///
/// Returns 401 Unauthorized without a valid session.
pub async fn current_user_handler(AuthUser { user, .. }: AuthUser) -> Json<UserResponse> {
    Json(user.into())
}

/// Logs a user in and sets a fresh session cookie.
///
/// # Endpoint
///
/// `POST /users/login/`
///
/// # Errors
///
/// Returns 400 Bad Request with `Invalid credentials.` if the username or
/// password is wrong; no cookie is set.
pub async fn login_handler(
    State(state): State<AppState>,
    context: RequestContext,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .auth_service
        .authenticate(&payload.username, &payload.password)
        .await?;

    let key = state
        .auth_service
        .login(&user, context.session_key.as_deref())
        .await?;

    Ok((
        AppendHeaders([(SET_COOKIE, state.session_cookie.set(&key))]),
        Json(DetailResponse::new("Success.")),
    ))
}

/// Ends the current session, if any, and clears the cookie.
///
/// # Endpoint
///
/// `POST /users/logout/`
///
/// Always succeeds, with or without a session.
pub async fn logout_handler(
    State(state): State<AppState>,
    context: RequestContext,
) -> Result<impl IntoResponse, AppError> {
    state
        .auth_service
        .logout(context.session_key.as_deref())
        .await?;

    Ok((
        AppendHeaders([(SET_COOKIE, state.session_cookie.clear())]),
        Json(DetailResponse::new("Success.")),
    ))
}

/// Changes the authenticated user's password.
///
/// # Endpoint
///
/// `POST /users/change-password/`
///
/// The session used for the request stays valid; other sessions of the same
/// user are invalidated.
///
/// # Errors
///
/// Returns 400 Bad Request if the current password is wrong or the new one is
/// rejected by the password rules.
/// Returns 401 Unauthorized without a valid session.
pub async fn change_password_handler(
    State(state): State<AppState>,
    AuthUser { user, session_key }: AuthUser,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<DetailResponse>, AppError> {
    state
        .auth_service
        .change_password(
            &user,
            session_key.as_deref(),
            &payload.current_password,
            &payload.new_password,
        )
        .await?;

    Ok(Json(DetailResponse::new("Password changed successfully.")))
}
