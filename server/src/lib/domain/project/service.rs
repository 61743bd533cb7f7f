use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::CreateProjectCommand;
use crate::domain::project::models::NewProject;
use crate::domain::project::models::Owner;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::project::ports::ProjectServicePort;
use crate::domain::team::ports::TeamRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for project operations.
///
/// Enforces the ownership rules: a user may only create projects for
/// themselves or for a team they belong to.
pub struct ProjectService<PR, TR, UR>
where
    PR: ProjectRepository,
    TR: TeamRepository,
    UR: UserRepository,
{
    projects: Arc<PR>,
    teams: Arc<TR>,
    users: Arc<UR>,
}

impl<PR, TR, UR> ProjectService<PR, TR, UR>
where
    PR: ProjectRepository,
    TR: TeamRepository,
    UR: UserRepository,
{
    pub fn new(projects: Arc<PR>, teams: Arc<TR>, users: Arc<UR>) -> Self {
        Self {
            projects,
            teams,
            users,
        }
    }

    async fn check_ownership(&self, creator_id: &UserId, owner: &Owner) -> Result<(), ProjectError> {
        match owner {
            Owner::User(owner_id) => {
                if owner_id != creator_id {
                    return Err(ProjectError::CreatorNotOwner);
                }
                self.users
                    .find_by_id(owner_id)
                    .await
                    .map_err(|e| ProjectError::DatabaseError(e.to_string()))?
                    .ok_or_else(|| ProjectError::OwnerNotFound(owner.to_string()))?;
            }
            Owner::Team(team_id) => {
                let team = self
                    .teams
                    .find_by_id(team_id)
                    .await
                    .map_err(|e| ProjectError::DatabaseError(e.to_string()))?
                    .ok_or_else(|| ProjectError::OwnerNotFound(owner.to_string()))?;
                if !team.has_member(creator_id) {
                    return Err(ProjectError::CreatorNotMember(team_id.to_string()));
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<PR, TR, UR> ProjectServicePort for ProjectService<PR, TR, UR>
where
    PR: ProjectRepository,
    TR: TeamRepository,
    UR: UserRepository,
{
    async fn create_project(
        &self,
        creator_id: &UserId,
        command: CreateProjectCommand,
    ) -> Result<Project, ProjectError> {
        if let Err(e) = self.check_ownership(creator_id, &command.owner).await {
            tracing::warn!(creator_id = %creator_id, owner = %command.owner, error = %e, "Project creation rejected");
            return Err(e);
        }

        let project = self
            .projects
            .create(NewProject {
                name: command.name,
                owner: command.owner,
                creator_id: *creator_id,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(project_id = %project.id, owner = %project.owner, "Project created");

        Ok(project)
    }

    async fn list_projects_for_owner(&self, owner: &Owner) -> Result<Vec<Project>, ProjectError> {
        self.projects.list_by_owner(owner).await
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Project, ProjectError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))
    }

    async fn list_projects_for_user(&self, user_id: &UserId) -> Result<Vec<Project>, ProjectError> {
        let teams = self
            .teams
            .list_by_member(user_id)
            .await
            .map_err(|e| ProjectError::DatabaseError(e.to_string()))?;

        let mut projects = self.projects.list_by_owner(&Owner::User(*user_id)).await?;
        for team in teams {
            projects.extend(self.projects.list_by_owner(&Owner::Team(team.id)).await?);
        }

        Ok(projects)
    }
}
