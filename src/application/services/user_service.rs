//! User registration and profile service.

use crate::domain::entities::{DEFAULT_PERMISSIONS, NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;
use std::sync::Arc;

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Service for creating and reading user accounts.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    bcrypt_cost: u32,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service hashing passwords at `bcrypt_cost`.
    pub fn new(repository: Arc<R>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    /// Registers a new staff user with the default permission set.
    ///
    /// The user row and its grants are written in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is already used.
    /// Returns [`AppError::Conflict`] if a concurrent registration won the race.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(&self, input: RegisterUser) -> Result<User, AppError> {
        if self.repository.exists_by_username(&input.username).await? {
            return Err(AppError::bad_request("Username is already used."));
        }

        let password_hash = hash_password(&input.password, self.bcrypt_cost).await?;

        let new_user = NewUser {
            username: input.username,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            is_staff: true,
        };

        let permissions = DEFAULT_PERMISSIONS.iter().map(|p| p.to_string()).collect();

        let user = self
            .repository
            .create_with_permissions(new_user, permissions)
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found."))
    }

    pub async fn permissions(&self, user_id: i64) -> Result<Vec<String>, AppError> {
        self.repository.permissions(user_id).await
    }

    /// Lists every user ordered by username.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use crate::utils::password::verify_password;
    use chrono::Utc;

    fn registration(username: &str) -> RegisterUser {
        RegisterUser {
            username: username.to_string(),
            password: "hunter22".to_string(),
            first_name: "Ann".to_string(),
            last_name: String::new(),
        }
    }

    #[tokio::test]
    async fn test_register_grants_defaults_and_staff() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_exists_by_username()
            .withf(|username| username == "ann")
            .times(1)
            .returning(|_| Ok(false));

        mock_repo
            .expect_create_with_permissions()
            .withf(|new_user, permissions| {
                new_user.is_staff
                    && new_user.password_hash != "hunter22"
                    && permissions.len() == DEFAULT_PERMISSIONS.len()
                    && DEFAULT_PERMISSIONS
                        .iter()
                        .all(|p| permissions.iter().any(|g| g == p))
            })
            .times(1)
            .returning(|new_user, _| {
                Ok(User {
                    id: 1,
                    username: new_user.username,
                    password_hash: new_user.password_hash,
                    first_name: new_user.first_name,
                    last_name: new_user.last_name,
                    is_staff: new_user.is_staff,
                    is_active: true,
                    date_joined: Utc::now(),
                    last_login: None,
                })
            });

        let service = UserService::new(Arc::new(mock_repo), 4);

        let user = service.register(registration("ann")).await.unwrap();

        assert_eq!(user.username, "ann");
        assert!(user.is_staff);
        assert!(verify_password("hunter22", &user.password_hash).await);
    }

    #[tokio::test]
    async fn test_register_username_taken() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_exists_by_username()
            .times(1)
            .returning(|_| Ok(true));
        mock_repo.expect_create_with_permissions().never();

        let service = UserService::new(Arc::new(mock_repo), 4);

        let err = service.register(registration("ann")).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Username is already used.");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo), 4);

        assert!(matches!(
            service.get(5).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }
}
