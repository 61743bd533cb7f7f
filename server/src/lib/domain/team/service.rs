use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::team::errors::TeamError;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamId;
use crate::domain::team::models::TeamName;
use crate::domain::team::ports::TeamRepository;
use crate::domain::team::ports::TeamServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for team operations.
pub struct TeamService<TR, UR>
where
    TR: TeamRepository,
    UR: UserRepository,
{
    teams: Arc<TR>,
    users: Arc<UR>,
}

impl<TR, UR> TeamService<TR, UR>
where
    TR: TeamRepository,
    UR: UserRepository,
{
    pub fn new(teams: Arc<TR>, users: Arc<UR>) -> Self {
        Self { teams, users }
    }
}

#[async_trait]
impl<TR, UR> TeamServicePort for TeamService<TR, UR>
where
    TR: TeamRepository,
    UR: UserRepository,
{
    async fn create_team(&self, creator_id: &UserId, name: TeamName) -> Result<Team, TeamError> {
        let creator = self
            .users
            .find_by_id(creator_id)
            .await
            .map_err(|e| TeamError::DatabaseError(e.to_string()))?;

        if creator.is_none() {
            return Err(TeamError::CreatorNotFound(creator_id.to_string()));
        }

        let team = self
            .teams
            .create(NewTeam::new(name, *creator_id, Utc::now()))
            .await?;

        tracing::info!(team_id = %team.id, creator_id = %creator_id, "Team created");

        Ok(team)
    }

    async fn get_team(&self, id: &TeamId) -> Result<Team, TeamError> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| TeamError::NotFound(id.to_string()))
    }

    async fn list_teams_for_user(&self, user_id: &UserId) -> Result<Vec<Team>, TeamError> {
        self.teams.list_by_member(user_id).await
    }
}
