use auth::TokenError;
use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Errors of the registration, login and token verification flows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("User not found: {0}")]
    PrincipalNotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Token signing failed: {0}")]
    SigningError(String),

    #[error("Token rejected: {0}")]
    Token(#[from] TokenError),

    #[error(transparent)]
    User(#[from] UserError),
}
