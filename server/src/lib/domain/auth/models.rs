use auth::Claims;

use crate::domain::user::models::Nickname;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Command to register a new principal.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub nickname: Nickname,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a register command; the nickname defaults to the username.
    pub fn new(username: Username, nickname: Option<Nickname>, password: String) -> Self {
        let nickname = nickname.unwrap_or_else(|| Nickname::from(&username));
        Self {
            username,
            nickname,
            password,
        }
    }
}

/// Raw login credentials.
///
/// The username is left unvalidated: a name that could never have been
/// registered simply is not found.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
    pub claims: Claims,
}
