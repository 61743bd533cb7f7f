use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_project::ProjectData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::ProjectId;
use crate::inbound::http::router::AppState;

pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<ApiSuccess<ProjectData>, ApiError> {
    let project_id = ProjectId::from_string(&project_id).map_err(ProjectError::from)?;

    state
        .project_service
        .get_project(&project_id)
        .await
        .map_err(ApiError::from)
        .map(|ref project| ApiSuccess::new(StatusCode::OK, project.into()))
}
