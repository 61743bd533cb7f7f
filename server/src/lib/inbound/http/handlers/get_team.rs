use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_team::TeamData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::TeamId;
use crate::inbound::http::router::AppState;

pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<ApiSuccess<TeamData>, ApiError> {
    let team_id = TeamId::from_string(&team_id).map_err(TeamError::from)?;

    state
        .team_service
        .get_team(&team_id)
        .await
        .map_err(ApiError::from)
        .map(|ref team| ApiSuccess::new(StatusCode::OK, team.into()))
}
