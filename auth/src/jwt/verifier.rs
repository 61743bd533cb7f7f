use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::crypto;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;
use super::signer::TOKEN_ALGORITHM;

/// Parses and validates tokens produced by `TokenSigner`.
///
/// The current time is always supplied by the caller.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
}

#[derive(Debug, Deserialize)]
struct TokenHeader {
    alg: String,
}

/// Claims as found on the wire, before presence checks.
#[derive(Debug, Deserialize)]
struct RawClaims {
    id: Option<Uuid>,
    username: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    iat: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    exp: Option<DateTime<Utc>>,
    sub: Option<String>,
}

impl RawClaims {
    fn into_claims(self) -> Result<Claims, TokenError> {
        Ok(Claims {
            issued_at: self.iat.ok_or(TokenError::MissingRequiredClaim("iat"))?,
            expires_at: self.exp.ok_or(TokenError::MissingRequiredClaim("exp"))?,
            id: self.id.ok_or(TokenError::MissingRequiredClaim("id"))?,
            username: self
                .username
                .ok_or(TokenError::MissingRequiredClaim("username"))?,
            subject: self.sub.ok_or(TokenError::MissingRequiredClaim("sub"))?,
        })
    }
}

impl TokenVerifier {
    /// Create a verifier for a shared secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Verify a token and return its claims.
    ///
    /// Checks run in a fixed order: shape, header, algorithm, signature,
    /// claim presence, expiry. The signature is checked before the claims
    /// segment is decoded, so any tampering with it reports `InvalidSignature`.
    ///
    /// # Errors
    /// * `MalformedToken` - Not three segments, or a segment fails to decode
    /// * `UnsupportedAlgorithm` - Header names anything other than HS256
    /// * `InvalidSignature` - Wrong secret or tampered content
    /// * `MissingRequiredClaim` - A claim field is absent
    /// * `TokenExpired` - `now` is at or after the expiry
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        let &[header_segment, claims_segment, signature] = segments.as_slice() else {
            return Err(TokenError::MalformedToken(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        };

        let header: TokenHeader = decode_segment(header_segment)?;

        if Algorithm::from_str(&header.alg).ok() != Some(TOKEN_ALGORITHM) {
            return Err(TokenError::UnsupportedAlgorithm(header.alg));
        }

        let message = format!("{}.{}", header_segment, claims_segment);
        let signature_matches = crypto::verify(
            signature,
            message.as_bytes(),
            &self.decoding_key,
            TOKEN_ALGORITHM,
        )
        .map_err(|e| TokenError::MalformedToken(e.to_string()))?;

        if !signature_matches {
            return Err(TokenError::InvalidSignature);
        }

        let claims = decode_segment::<RawClaims>(claims_segment)?.into_claims()?;

        if claims.is_expired(now) {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims)
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::MalformedToken(format!("invalid base64url: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::MalformedToken(format!("invalid json: {}", e)))
}
