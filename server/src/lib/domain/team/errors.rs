use thiserror::Error;

/// Error for TeamId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TeamName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamNameError {
    #[error("Team name must not be empty")]
    Empty,

    #[error("Team name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for team operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamError {
    #[error("Invalid team ID: {0}")]
    InvalidTeamId(#[from] TeamIdError),

    #[error("Invalid team name: {0}")]
    InvalidName(#[from] TeamNameError),

    #[error("Team not found: {0}")]
    NotFound(String),

    #[error("Creator not found: {0}")]
    CreatorNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
