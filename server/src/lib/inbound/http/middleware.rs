use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use chrono::Utc;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::INVALID_TOKEN_MESSAGE;
use crate::inbound::http::router::AppState;

/// Extension type to store authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware that verifies the session token and adds user info to request extensions.
///
/// The token is read from `Authorization: Bearer` first, then from the session cookie.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(req.headers(), &state.cookie.name)
        .ok_or_else(|| ApiError::Unauthorized("Missing authentication token".to_string()))?;

    let claims = state
        .auth_service
        .verify_token(&token, Utc::now())
        .map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(claims.id),
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}
