//! Authentication service: credentials, sessions and password changes.

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::{NewSession, User};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::password::{dummy_hash, hash_password, verify_password};
use crate::utils::password_validation::PasswordPolicy;
use crate::utils::session_key::{constant_time_eq, generate_session_key, keyed_hash};

/// Settings shared by every authentication operation.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// HMAC key for session key hashes and session auth hashes.
    pub secret_key: String,
    pub bcrypt_cost: u32,
    pub session_ttl: Duration,
    pub password_policy: PasswordPolicy,
}

/// Service for logging users in and out and resolving session cookies.
///
/// Raw session keys are handed to the client and never stored: the session
/// table is addressed by `HMAC-SHA256(secret, key)`. Each session also records
/// `HMAC-SHA256(secret, password_hash)`; a session whose recorded value no
/// longer matches the user's current hash is discarded.
pub struct AuthService<U, S>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
{
    users: Arc<U>,
    sessions: Arc<S>,
    settings: AuthSettings,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository + ?Sized,
    S: SessionRepository + ?Sized,
{
    pub fn new(users: Arc<U>, sessions: Arc<S>, settings: AuthSettings) -> Self {
        Self {
            users,
            sessions,
            settings,
        }
    }

    fn session_key_hash(&self, key: &str) -> String {
        keyed_hash(&self.settings.secret_key, key)
    }

    fn session_auth_hash(&self, password_hash: &str) -> String {
        keyed_hash(&self.settings.secret_key, password_hash)
    }

    /// Verifies a username and password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] if the user is unknown,
    /// inactive, or the password does not match.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            // Costs one bcrypt verification, as for a known user.
            verify_password(password, &dummy_hash(self.settings.bcrypt_cost)).await;
            tracing::warn!(username = %username, "Login failed: unknown user");
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash).await {
            tracing::warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            tracing::warn!(user_id = user.id, "Login failed: inactive user");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Starts a session for `user` and returns the raw key for the cookie.
    ///
    /// Any session presented with the request is deleted first, so a login
    /// always yields a fresh key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, user: &User, previous_key: Option<&str>) -> Result<String, AppError> {
        if let Some(previous) = previous_key {
            self.sessions
                .delete(&self.session_key_hash(previous))
                .await?;
        }

        let key = generate_session_key();

        self.sessions
            .create(NewSession {
                key_hash: self.session_key_hash(&key),
                user_id: user.id,
                auth_hash: self.session_auth_hash(&user.password_hash),
                expires_at: Utc::now() + self.settings.session_ttl,
            })
            .await?;

        self.users.touch_last_login(user.id).await?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(key)
    }

    /// Resolves a raw session key to its user.
    ///
    /// Returns `None` for unknown keys. Expired sessions, sessions of missing
    /// or inactive users, and sessions whose auth hash is stale are deleted
    /// and also yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, key: &str) -> Result<Option<User>, AppError> {
        let key_hash = self.session_key_hash(key);

        let Some(session) = self.sessions.find(&key_hash).await? else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            tracing::debug!(user_id = session.user_id, "Session expired");
            self.sessions.delete(&key_hash).await?;
            return Ok(None);
        }

        let user = match self.users.find_by_id(session.user_id).await? {
            Some(user) if user.is_active => user,
            _ => {
                self.sessions.delete(&key_hash).await?;
                return Ok(None);
            }
        };

        let expected = self.session_auth_hash(&user.password_hash);
        if !constant_time_eq(&expected, &session.auth_hash) {
            tracing::debug!(user_id = user.id, "Session invalidated by password change");
            self.sessions.delete(&key_hash).await?;
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Ends the session identified by `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn logout(&self, key: Option<&str>) -> Result<(), AppError> {
        if let Some(key) = key {
            self.sessions.delete(&self.session_key_hash(key)).await?;
            tracing::info!("User logged out");
        }
        Ok(())
    }

    /// Replaces the user's password.
    ///
    /// The session identified by `current_session_key` is re-bound to the new
    /// hash and stays valid; every other session of the user stops resolving.
    ///
    /// The password update is the committing write. If re-binding the current
    /// session fails afterwards, the error is logged and the change still
    /// succeeds; that session then resolves as anonymous like the others.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `current_password` is wrong or the
    /// new password fails the password policy (messages joined by a space).
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn change_password(
        &self,
        user: &User,
        current_session_key: Option<&str>,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if !verify_password(current_password, &user.password_hash).await {
            return Err(AppError::bad_request("Current password is incorrect."));
        }

        self.settings
            .password_policy
            .validate(new_password)
            .map_err(|errors| AppError::bad_request(errors.join(" ")))?;

        let password_hash = hash_password(new_password, self.settings.bcrypt_cost).await?;

        self.users.update_password(user.id, &password_hash).await?;

        if let Some(key) = current_session_key {
            let rebound = self
                .sessions
                .update_auth_hash(
                    &self.session_key_hash(key),
                    &self.session_auth_hash(&password_hash),
                )
                .await;

            if let Err(e) = rebound {
                tracing::error!(
                    user_id = user.id,
                    error = %e,
                    "Password changed but current session could not be re-bound"
                );
            }
        }

        tracing::info!(user_id = user.id, "Password changed");

        Ok(())
    }
}
