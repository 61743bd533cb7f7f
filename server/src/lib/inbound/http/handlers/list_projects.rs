use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use super::create_project::ProjectData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::project::models::Owner;
use crate::inbound::http::router::AppState;

/// `GET /api/projects?owner_type=team&owner_id=<uuid>`
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<ApiSuccess<Vec<ProjectData>>, ApiError> {
    let owner = Owner::from_parts(&query.owner_type, query.owner_id)?;

    state
        .project_service
        .list_projects_for_owner(&owner)
        .await
        .map_err(ApiError::from)
        .map(|projects| {
            ApiSuccess::new(
                StatusCode::OK,
                projects.iter().map(ProjectData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListProjectsQuery {
    owner_type: String,
    owner_id: Uuid,
}
