use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::CreateProjectCommand;
use crate::domain::project::models::Owner;
use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectName;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_project(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<CreateProjectRequest>,
) -> Result<ApiSuccess<ProjectData>, ApiError> {
    state
        .project_service
        .create_project(&authenticated.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::new(StatusCode::CREATED, project.into()))
}

/// HTTP request body for creating a project (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProjectRequest {
    name: String,
    owner_type: String,
    owner_id: Uuid,
}

impl CreateProjectRequest {
    fn try_into_command(self) -> Result<CreateProjectCommand, ProjectError> {
        Ok(CreateProjectCommand {
            name: ProjectName::new(self.name)?,
            owner: Owner::from_parts(&self.owner_type, self.owner_id)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectData {
    pub id: String,
    pub name: String,
    pub owner_type: String,
    pub owner_id: String,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Project> for ProjectData {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name.as_str().to_string(),
            owner_type: project.owner.kind().to_string(),
            owner_id: project.owner.id().to_string(),
            creator_id: project.creator_id.to_string(),
            created_at: project.created_at,
        }
    }
}
