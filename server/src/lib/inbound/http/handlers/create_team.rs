use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamName;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_team(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTeamRequest>,
) -> Result<ApiSuccess<TeamData>, ApiError> {
    let name = TeamName::new(body.name).map_err(TeamError::from)?;

    state
        .team_service
        .create_team(&authenticated.user_id, name)
        .await
        .map_err(ApiError::from)
        .map(|ref team| ApiSuccess::new(StatusCode::CREATED, team.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTeamRequest {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamData {
    pub id: String,
    pub name: String,
    pub creator_id: String,
    pub member_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamData {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.to_string(),
            name: team.name.as_str().to_string(),
            creator_id: team.creator_id.to_string(),
            member_ids: team.member_ids.iter().map(|id| id.to_string()).collect(),
            created_at: team.created_at,
        }
    }
}
