use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::auth::models::LoginCommand;
use crate::inbound::http::cookies::session_cookie;
use crate::inbound::http::router::AppState;

/// Authenticate and hand out the token both in the body and as a cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let session = state
        .auth_service
        .login(
            LoginCommand {
                username: body.username,
                password: body.password,
            },
            Utc::now(),
        )
        .await?;

    let cookie = session_cookie(
        &state.cookie,
        session.token.clone(),
        session.claims.expires_at,
    );

    Ok((
        jar.add(cookie),
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                user: (&session.user).into(),
                token: session.token,
                expires_at: session.claims.expires_at,
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
