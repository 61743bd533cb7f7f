use async_trait::async_trait;

use crate::domain::team::errors::TeamError;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamId;
use crate::domain::team::models::TeamName;
use crate::domain::user::models::UserId;

/// Port for team operations.
#[async_trait]
pub trait TeamServicePort: Send + Sync + 'static {
    /// Create a team; the creator becomes its first member.
    ///
    /// # Errors
    /// * `CreatorNotFound` - Creator is not a registered user
    /// * `DatabaseError` - Persistence failed
    async fn create_team(&self, creator_id: &UserId, name: TeamName) -> Result<Team, TeamError>;

    /// Retrieve a team by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Team does not exist
    /// * `DatabaseError` - Persistence failed
    async fn get_team(&self, id: &TeamId) -> Result<Team, TeamError>;

    /// List the teams a user belongs to, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Persistence failed
    async fn list_teams_for_user(&self, user_id: &UserId) -> Result<Vec<Team>, TeamError>;
}

/// Persistence operations for the team aggregate.
#[async_trait]
pub trait TeamRepository: Send + Sync + 'static {
    /// Persist a team together with its initial membership.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, team: NewTeam) -> Result<Team, TeamError>;

    /// Retrieve team by identifier, members included.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, TeamError>;

    /// Retrieve every team the user is a member of, ordered by creation time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_member(&self, user_id: &UserId) -> Result<Vec<Team>, TeamError>;
}
