use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_team::TeamData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Teams the caller belongs to.
pub async fn list_user_teams(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TeamData>>, ApiError> {
    state
        .team_service
        .list_teams_for_user(&authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|teams| ApiSuccess::new(StatusCode::OK, teams.iter().map(TeamData::from).collect()))
}
