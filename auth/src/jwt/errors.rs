use thiserror::Error;

/// Error type for token issuance and verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Missing required claim: {0}")]
    MissingRequiredClaim(&'static str),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Failed to sign token: {0}")]
    SigningError(String),

    #[error("Token lifetime must be a positive number of seconds of at most ten years, got {0}")]
    InvalidTtl(i64),
}
