use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Algorithm every token is signed with and the only one accepted on verification.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Signs claims into a compact `header.claims.signature` token.
///
/// The signer keeps only the key; claims are borrowed per call.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    has_secret: bool,
}

impl TokenSigner {
    /// Create a signer for a shared secret.
    ///
    /// An empty secret is accepted here and rejected on every `sign` call,
    /// so misconfiguration surfaces as `SigningError` instead of a panic.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            has_secret: !secret.is_empty(),
        }
    }

    /// Sign claims.
    ///
    /// Output is deterministic for identical claims and secret.
    ///
    /// # Errors
    /// * `SigningError` - Secret is empty or the claims could not be encoded
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        if !self.has_secret {
            return Err(TokenError::SigningError(
                "signing secret is empty".to_string(),
            ));
        }

        encode(&Header::new(TOKEN_ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use chrono::TimeZone;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn claims() -> Claims {
        let id = Uuid::new_v4();
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Claims {
            id,
            username: "alice".to_string(),
            issued_at,
            expires_at: issued_at + chrono::Duration::hours(1),
            subject: id.to_string(),
        }
    }

    #[test]
    fn test_sign_produces_three_segments() {
        let signer = TokenSigner::new(b"test_secret_key_at_least_32_bytes!");

        let token = signer.sign(&claims()).expect("Failed to sign token");

        assert_eq!(token.split('.').count(), 3);

        let header_segment = token.split('.').next().unwrap();
        let header: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(header_segment).unwrap()).unwrap();
        assert_eq!(header["alg"], "HS256");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = TokenSigner::new(b"test_secret_key_at_least_32_bytes!");
        let claims = claims();

        let first = signer.sign(&claims).unwrap();
        let second = signer.sign(&claims).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_differs_per_secret() {
        let claims = claims();

        let first = TokenSigner::new(b"secret1_at_least_32_bytes_long_key!")
            .sign(&claims)
            .unwrap();
        let second = TokenSigner::new(b"secret2_at_least_32_bytes_long_key!")
            .sign(&claims)
            .unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_sign_with_empty_secret() {
        let signer = TokenSigner::new(b"");

        let result = signer.sign(&claims());

        assert!(matches!(result, Err(TokenError::SigningError(_))));
    }
}
