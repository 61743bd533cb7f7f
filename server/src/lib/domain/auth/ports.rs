use async_trait::async_trait;
use auth::Claims;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::AuthenticationError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::Session;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for registration, login and session verification.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new principal.
    ///
    /// # Returns
    /// Created user with its assigned identifier
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `InvalidPassword` - Password could not be hashed
    /// * `User` - Repository failure
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthenticationError>;

    /// Check credentials and issue a session token valid from `now`.
    ///
    /// # Errors
    /// * `PrincipalNotFound` - No user with this username
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `SigningError` - Token could not be signed
    /// * `User` - Repository failure
    async fn login(
        &self,
        command: LoginCommand,
        now: DateTime<Utc>,
    ) -> Result<Session, AuthenticationError>;

    /// Verify a presented token at `now`.
    ///
    /// # Errors
    /// * `Token` - Token is malformed, forged or expired
    fn verify_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthenticationError>;

    /// Load the principal a verified token refers to.
    ///
    /// # Errors
    /// * `PrincipalNotFound` - User no longer exists
    /// * `User` - Repository failure
    async fn current_user(&self, id: &UserId) -> Result<User, AuthenticationError>;
}
