use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthenticationError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::Session;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserRepository;

/// Domain service for registration and session issuance.
///
/// Every call runs to a terminal outcome; nothing is retried.
pub struct AuthenticationService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthenticationService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token handling, owns the signing secret
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn find_principal(&self, username: &str) -> Result<User, AuthenticationError> {
        let user = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        user.ok_or_else(|| AuthenticationError::PrincipalNotFound(username.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthenticationService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthenticationError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AuthenticationError::UsernameTaken(
                command.username.to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AuthenticationError::InvalidPassword(e.to_string()))?;

        let new_user = NewUser {
            username: command.username,
            nickname: command.nickname,
            password_hash,
            created_at: Utc::now(),
        };

        let user = self.repository.create(new_user).await.map_err(|e| match e {
            UserError::UsernameAlreadyExists(username) => {
                AuthenticationError::UsernameTaken(username)
            }
            other => AuthenticationError::User(other),
        })?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn login(
        &self,
        command: LoginCommand,
        now: DateTime<Utc>,
    ) -> Result<Session, AuthenticationError> {
        let user = self.find_principal(&command.username).await?;

        let issued = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, &user, now)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Password mismatch");
                    AuthenticationError::InvalidCredentials
                }
                auth::AuthenticationError::PasswordError(err) => {
                    tracing::warn!(user_id = %user.id, error = %err, "Stored password hash unusable");
                    AuthenticationError::InvalidCredentials
                }
                auth::AuthenticationError::TokenError(err) => {
                    tracing::error!(user_id = %user.id, error = %err, "Token signing failed");
                    AuthenticationError::SigningError(err.to_string())
                }
            })?;

        tracing::info!(
            user_id = %user.id,
            expires_at = %issued.claims.expires_at,
            "Session issued"
        );

        Ok(Session {
            user,
            token: issued.token,
            claims: issued.claims,
        })
    }

    fn verify_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthenticationError> {
        Ok(self.authenticator.validate_token(token, now)?)
    }

    async fn current_user(&self, id: &UserId) -> Result<User, AuthenticationError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthenticationError::PrincipalNotFound(id.to_string()))
    }
}
