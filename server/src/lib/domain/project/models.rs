use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::errors::ProjectIdError;
use crate::domain::project::errors::ProjectNameError;
use crate::domain::team::models::TeamId;
use crate::domain::user::models::UserId;

/// Project aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub owner: Owner,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project awaiting persistence; the repository assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: ProjectName,
    pub owner: Owner,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewProject {
    pub fn with_id(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            owner: self.owner,
            creator_id: self.creator_id,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Command to create a project on behalf of an authenticated user.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub name: ProjectName,
    pub owner: Owner,
}

/// Either a single user or a team owns a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    User(UserId),
    Team(TeamId),
}

impl Owner {
    const USER: &'static str = "user";
    const TEAM: &'static str = "team";

    /// Rebuild an owner from its stored kind and identifier.
    ///
    /// # Errors
    /// * `InvalidOwnerType` - Kind is neither `user` nor `team`
    pub fn from_parts(kind: &str, id: Uuid) -> Result<Self, ProjectError> {
        match kind {
            Self::USER => Ok(Owner::User(UserId(id))),
            Self::TEAM => Ok(Owner::Team(TeamId(id))),
            other => Err(ProjectError::InvalidOwnerType(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Owner::User(_) => Self::USER,
            Owner::Team(_) => Self::TEAM,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Owner::User(id) => id.into_uuid(),
            Owner::Team(id) => id.into_uuid(),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}

/// Project unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProjectIdError> {
        Uuid::parse_str(s)
            .map(ProjectId)
            .map_err(|e| ProjectIdError::InvalidFormat(e.to_string()))
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Project name, 1-100 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, ProjectNameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();
        if length == 0 {
            return Err(ProjectNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(ProjectNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
