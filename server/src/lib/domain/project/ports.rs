use async_trait::async_trait;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::CreateProjectCommand;
use crate::domain::project::models::NewProject;
use crate::domain::project::models::Owner;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectId;
use crate::domain::user::models::UserId;

/// Port for project operations.
#[async_trait]
pub trait ProjectServicePort: Send + Sync + 'static {
    /// Create a project owned by the creator or by one of the creator's teams.
    ///
    /// # Errors
    /// * `CreatorNotOwner` - User-owned project names someone else as owner
    /// * `OwnerNotFound` - Owning user or team does not exist
    /// * `CreatorNotMember` - Creator does not belong to the owning team
    /// * `DatabaseError` - Persistence failed
    async fn create_project(
        &self,
        creator_id: &UserId,
        command: CreateProjectCommand,
    ) -> Result<Project, ProjectError>;

    /// List projects held by an owner, oldest first.
    async fn list_projects_for_owner(&self, owner: &Owner) -> Result<Vec<Project>, ProjectError>;

    /// Retrieve a project by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Project does not exist
    /// * `DatabaseError` - Persistence failed
    async fn get_project(&self, id: &ProjectId) -> Result<Project, ProjectError>;

    /// List the projects a user can work on: their own, then those of each
    /// team they belong to.
    ///
    /// # Errors
    /// * `DatabaseError` - Persistence failed
    async fn list_projects_for_user(&self, user_id: &UserId) -> Result<Vec<Project>, ProjectError>;
}

/// Persistence operations for the project aggregate.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, project: NewProject) -> Result<Project, ProjectError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: &Owner) -> Result<Vec<Project>, ProjectError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError>;
}
