use chrono::DateTime;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::ClaimsFactory;
use crate::jwt::Principal;
use crate::jwt::TokenError;
use crate::jwt::TokenSigner;
use crate::jwt::TokenTtl;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Owns the signing secret for its lifetime; construct one per process from
/// configuration and share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    signer: TokenSigner,
    verifier: TokenVerifier,
    ttl: TokenTtl,
}

/// Token produced by a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Signed compact token
    pub token: String,

    /// Claims embedded in `token`; `expires_at` drives cookie expiry
    pub claims: Claims,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &[u8], ttl: TokenTtl) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            signer: TokenSigner::new(secret),
            verifier: TokenVerifier::new(secret),
            ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password too long or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Build and sign claims for a principal, valid from `now`.
    ///
    /// # Errors
    /// * `TokenError::SigningError` - Token signing failed
    pub fn issue_token<P: Principal + ?Sized>(
        &self,
        principal: &P,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let claims = ClaimsFactory::build(principal, now, self.ttl);
        let token = self.signer.sign(&claims)?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `principal` - Identity the token is issued for
    /// * `now` - Issuance time
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `TokenError` - Token signing failed
    pub fn authenticate<P: Principal + ?Sized>(
        &self,
        password: &str,
        stored_hash: &str,
        principal: &P,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.verify_password(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(principal, now)?)
    }

    /// Validate a token at `now` and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, forged, or expired
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.verifier.verify(token, now)
    }
}
