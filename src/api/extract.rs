//! Request extractors shared by the handlers.
//!
//! - [`RequestContext`] - Optional user and presented session key
//! - [`AuthUser`] - Requires an authenticated user, 401 otherwise
//! - [`ValidatedJson`] - JSON body that passed its `validator` rules

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use validator::Validate;

use crate::domain::entities::User;
use crate::error::AppError;

/// Per-request authentication state, inserted by
/// [`crate::api::middleware::session::layer`].
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user: Option<User>,
    /// Raw session key from the cookie, even when it did not resolve.
    pub session_key: Option<String>,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// The authenticated user of the request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub session_key: Option<String>,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default();

        match context.user {
            Some(user) => Ok(AuthUser {
                user,
                session_key: context.session_key,
            }),
            None => Err(AppError::Unauthorized),
        }
    }
}

/// JSON body deserialized into `T` and validated.
///
/// Malformed JSON, a wrong content type, or failed rules all produce
/// `400 Bad Request` with a `detail` message.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::bad_request(rejection.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
