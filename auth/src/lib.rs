//! Session token and password utilities
//!
//! - Password hashing (Argon2id)
//! - Claims construction, HS256 signing and verification with caller-supplied time
//! - Authentication coordination
//!
//! Services implement [`Principal`] for their user type and keep their own
//! error taxonomy on top of [`TokenError`] and [`PasswordError`].
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{ClaimsFactory, Principal, TokenSigner, TokenTtl, TokenVerifier};
//! use chrono::{Duration, Utc};
//! use uuid::Uuid;
//!
//! struct User(Uuid, String);
//!
//! impl Principal for User {
//!     fn principal_id(&self) -> Uuid { self.0 }
//!     fn principal_username(&self) -> &str { &self.1 }
//! }
//!
//! let user = User(Uuid::new_v4(), "alice".to_string());
//! let now = Utc::now();
//! let claims = ClaimsFactory::build(&user, now, TokenTtl::from_hours(24).unwrap());
//!
//! let token = TokenSigner::new(b"secret_key_at_least_32_bytes_long!").sign(&claims).unwrap();
//! let verified = TokenVerifier::new(b"secret_key_at_least_32_bytes_long!")
//!     .verify(&token, now + Duration::hours(1))
//!     .unwrap();
//! assert_eq!(verified, claims);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use jwt::Claims;
pub use jwt::ClaimsFactory;
pub use jwt::Principal;
pub use jwt::TokenError;
pub use jwt::TokenSigner;
pub use jwt::TokenTtl;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
