use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::team::errors::TeamIdError;
use crate::domain::team::errors::TeamNameError;
use crate::domain::user::models::UserId;

/// Team aggregate entity.
///
/// The creator is always the first member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
    pub creator_id: UserId,
    pub member_ids: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn has_member(&self, user_id: &UserId) -> bool {
        self.member_ids.contains(user_id)
    }
}

/// Team awaiting persistence; the repository assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: TeamName,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl NewTeam {
    pub fn new(name: TeamName, creator_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            name,
            creator_id,
            created_at,
        }
    }

    /// Attach a store-assigned identifier, seeding membership with the creator.
    pub fn with_id(self, id: TeamId) -> Team {
        Team {
            id,
            name: self.name,
            creator_id: self.creator_id,
            member_ids: vec![self.creator_id],
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Team unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamId(pub Uuid);

impl TeamId {
    /// Parse a team ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TeamIdError> {
        Uuid::parse_str(s)
            .map(TeamId)
            .map_err(|e| TeamIdError::InvalidFormat(e.to_string()))
    }

    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Team name, 1-100 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamName(String);

impl TeamName {
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, TeamNameError> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();
        if length == 0 {
            return Err(TeamNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(TeamNameError::TooLong {
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

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
