//! Session cookie resolution middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::extract::RequestContext;
use crate::{error::AppError, state::AppState};

/// Resolves the session cookie into a [`RequestContext`] request extension.
///
/// Runs on every route. It never rejects a request for lacking a session;
/// handlers that need one use [`crate::api::extract::AuthUser`], which answers
/// `401 Unauthorized`.
///
/// # Cookie Format
///
/// ```text
/// Cookie: sessionid=<key>
/// ```
///
/// # Resolution Flow
///
/// 1. Extract the session cookie (name from configuration)
/// 2. Look up the session by the keyed hash of its value
/// 3. Drop it if expired, if its user is gone or inactive, or if the user's
///    password changed since it was issued
/// 4. Attach the user (if any) and the presented key to the request
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::api::middleware::session;
///
/// let app = Router::new()
///     .merge(api_routes())
///     .layer(middleware::from_fn_with_state(state.clone(), session::layer));
/// ```
///
/// # Errors
///
/// Returns `500 Internal Server Error` if the session store fails.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session_key = st.session_cookie.read(req.headers());

    let user = match &session_key {
        Some(key) => st.auth_service.resolve(key).await?,
        None => None,
    };

    req.extensions_mut()
        .insert(RequestContext { user, session_key });

    Ok(next.run(req).await)
}
