use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::SubsecRound;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::TokenError;

/// Identity that a token can be issued for.
///
/// Services implement this for their own user type so the token subsystem
/// never depends on a service's domain model.
pub trait Principal {
    /// Stable identifier assigned by the store.
    fn principal_id(&self) -> Uuid;

    /// Unique username, copied into the claims for display.
    fn principal_username(&self) -> &str;
}

/// Session claims carried inside a signed token.
///
/// Timestamps travel as integer seconds since the Unix epoch (`iat`, `exp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Principal identifier
    pub id: Uuid,

    /// Principal username at issuance time
    pub username: String,

    /// Issued at
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    /// Expires at, always later than `issued_at`
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,

    /// String form of `id`
    #[serde(rename = "sub")]
    pub subject: String,
}

impl Claims {
    /// Check whether the claims are expired at `now`.
    ///
    /// A token stops being valid at the exact `expires_at` instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Token time-to-live.
///
/// Whole seconds only, at least one, so that `expires_at > issued_at`
/// survives the numeric-date encoding. Capped at [`TokenTtl::MAX_SECONDS`]
/// so that adding it to any realistic issuance time cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTtl(Duration);

impl TokenTtl {
    /// Longest accepted lifetime, ten years.
    pub const MAX_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

    /// Create a TTL from a number of seconds.
    ///
    /// # Errors
    /// * `InvalidTtl` - `seconds` is zero, negative or above `MAX_SECONDS`
    pub fn from_seconds(seconds: i64) -> Result<Self, TokenError> {
        if seconds <= 0 || seconds > Self::MAX_SECONDS {
            return Err(TokenError::InvalidTtl(seconds));
        }
        Duration::try_seconds(seconds)
            .map(Self)
            .ok_or(TokenError::InvalidTtl(seconds))
    }

    /// Create a TTL from a number of hours.
    ///
    /// # Errors
    /// * `InvalidTtl` - `hours` is zero, negative or longer than `MAX_SECONDS`
    pub fn from_hours(hours: i64) -> Result<Self, TokenError> {
        let seconds = hours
            .checked_mul(60 * 60)
            .ok_or(TokenError::InvalidTtl(hours))?;
        Self::from_seconds(seconds)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for TokenTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0.num_seconds())
    }
}

/// Builds claims for a principal.
pub struct ClaimsFactory;

impl ClaimsFactory {
    /// Build claims valid from `issued_at` for `ttl`.
    ///
    /// `issued_at` is truncated to whole seconds, matching what the token
    /// can carry, so the returned value equals what verification yields.
    pub fn build<P: Principal + ?Sized>(
        principal: &P,
        issued_at: DateTime<Utc>,
        ttl: TokenTtl,
    ) -> Claims {
        let issued_at = issued_at.trunc_subsecs(0);
        let id = principal.principal_id();

        Claims {
            id,
            username: principal.principal_username().to_string(),
            issued_at,
            expires_at: issued_at + ttl.as_duration(),
            subject: id.to_string(),
        }
    }
}
