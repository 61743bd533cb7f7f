use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_project::ProjectData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Projects owned by the caller, followed by those of the caller's teams.
pub async fn list_user_projects(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<ProjectData>>, ApiError> {
    state
        .project_service
        .list_projects_for_user(&authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|projects| {
            ApiSuccess::new(
                StatusCode::OK,
                projects.iter().map(ProjectData::from).collect(),
            )
        })
}
