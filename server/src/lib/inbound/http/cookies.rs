use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use chrono::DateTime;
use chrono::Utc;
use time::OffsetDateTime;

use crate::config::CookieConfig;

/// Session cookie carrying `token`, expiring with the token's claims.
pub fn session_cookie(
    config: &CookieConfig,
    token: String,
    expires_at: DateTime<Utc>,
) -> Cookie<'static> {
    let mut builder = Cookie::build((config.name.clone(), token))
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .path("/");

    match OffsetDateTime::from_unix_timestamp(expires_at.timestamp()) {
        Ok(expires) => builder = builder.expires(expires),
        Err(e) => tracing::warn!(error = %e, "Session cookie expiry out of range"),
    }

    builder.build()
}

/// Cookie matching the session cookie's name and path, for removal.
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((config.name.clone(), "")).path("/").build()
}
