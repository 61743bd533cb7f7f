use thiserror::Error;

/// Error for ProjectId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for ProjectName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectNameError {
    #[error("Project name must not be empty")]
    Empty,

    #[error("Project name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for project operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Invalid project ID: {0}")]
    InvalidProjectId(#[from] ProjectIdError),

    #[error("Invalid project name: {0}")]
    InvalidName(#[from] ProjectNameError),

    #[error("Invalid owner type: {0}")]
    InvalidOwnerType(String),

    #[error("User-owned projects must be owned by their creator")]
    CreatorNotOwner,

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Owner not found: {0}")]
    OwnerNotFound(String),

    #[error("Creator is not a member of team {0}")]
    CreatorNotMember(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
