//! Token Service
//!
//! Issues and verifies stateless bearer tokens in JWS compact form:
//!
//! ```text
//! base64url({"alg":"HS256","typ":"JWT"}) . base64url({"sub","iat","exp"}) . base64url(HMAC-SHA256)
//! ```
//!
//! The MAC covers the raw `header.claims` text and is checked before any
//! segment is decoded, so a token is only parsed once it is known to be ours.

use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::crypto::{from_base64url, hmac_sha256, hmac_sha256_verify, to_base64url};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::application::config::{AuthConfig, SigningSecret};
use crate::error::{AuthError, ConfigError, TokenError};
use kernel::id::UserId;

/// Signature algorithm name carried in the header
const ALGORITHM: &str = "HS256";

#[derive(Serialize, Deserialize)]
struct Header {
    alg: String,
    #[serde(default)]
    typ: Option<String>,
}

/// Token payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier
    pub sub: Uuid,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// Token issuer and verifier
///
/// Holds only the secret and lifetime, so one instance is shared (`Arc`) by
/// every request.
#[derive(Debug, Clone)]
pub struct TokenService {
    secret: SigningSecret,
    lifetime: Duration,
}

impl TokenService {
    /// Fails with [`ConfigError::MissingSecret`] when `secret` is empty
    pub fn new(secret: impl Into<Vec<u8>>, lifetime: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            secret: SigningSecret::new(secret)?,
            lifetime,
        })
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            secret: config.token_secret.clone(),
            lifetime: config.token_lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a token for `subject`, valid from `now` for the configured lifetime
    pub fn issue(&self, subject: UserId, now: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = now.timestamp();
        let lifetime = i64::try_from(self.lifetime.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: subject.into_uuid(),
            iat,
            exp: iat.saturating_add(lifetime),
        };

        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: Some("JWT".to_string()),
        };

        let signing_input = format!(
            "{}.{}",
            to_base64url(&serde_json::to_vec(&header)?),
            to_base64url(&serde_json::to_vec(&claims)?)
        );
        let signature = hmac_sha256(self.secret.as_bytes(), signing_input.as_bytes());

        tracing::debug!(user_id = %subject, exp = claims.exp, "Issued token");

        Ok(format!("{signing_input}.{}", to_base64url(&signature)))
    }

    /// Verify a token at `now` and return its subject
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, AuthError> {
        let claims = self.verify_claims(token)?;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(UserId::from_uuid(claims.sub))
    }

    /// Check structure, signature and header; expiry is left to the caller
    fn verify_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut segments = token.split('.');
        let (Some(header), Some(claims), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(AuthError::Malformed);
        };

        if header.is_empty() || claims.is_empty() || signature.is_empty() {
            return Err(AuthError::Malformed);
        }

        let signing_input = &token[..header.len() + 1 + claims.len()];
        let signature = from_base64url(signature).map_err(|_| AuthError::InvalidSignature)?;
        if !hmac_sha256_verify(self.secret.as_bytes(), signing_input.as_bytes(), &signature) {
            return Err(AuthError::InvalidSignature);
        }

        let header: Header = decode_segment(header)?;
        if header.alg != ALGORITHM {
            return Err(AuthError::Malformed);
        }

        decode_segment(claims)
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, AuthError> {
    let bytes = from_base64url(segment).map_err(|_| AuthError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(3600)).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    /// Sign arbitrary segments with the test secret
    fn sign(header: &str, claims: &str) -> String {
        let input = format!("{}.{}", to_base64url(header.as_bytes()), to_base64url(claims.as_bytes()));
        let sig = hmac_sha256(b"test-secret", input.as_bytes());
        format!("{input}.{}", to_base64url(&sig))
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert!(matches!(
            TokenService::new("", Duration::from_secs(3600)),
            Err(ConfigError::MissingSecret)
        ));
    }

    #[test]
    fn test_issue_then_verify_within_lifetime() {
        let tokens = service();
        let user = UserId::new();
        let token = tokens.issue(user, t0()).unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(tokens.verify(&token, t0()), Ok(user));
        assert_eq!(
            tokens.verify(&token, t0() + chrono::Duration::seconds(1800)),
            Ok(user)
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let tokens = service();
        let token = tokens.issue(UserId::new(), t0()).unwrap();

        assert!(tokens.verify(&token, t0() + chrono::Duration::seconds(3599)).is_ok());
        assert_eq!(
            tokens.verify(&token, t0() + chrono::Duration::seconds(3600)),
            Err(AuthError::Expired)
        );
        assert_eq!(
            tokens.verify(&token, t0() + chrono::Duration::seconds(3601)),
            Err(AuthError::Expired)
        );
    }

    #[test]
    fn test_header_and_claims_layout() {
        let user = UserId::new();
        let token = service().issue(user, t0()).unwrap();
        let mut parts = token.split('.');

        let header: serde_json::Value =
            serde_json::from_slice(&from_base64url(parts.next().unwrap()).unwrap()).unwrap();
        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");

        let claims: Claims =
            serde_json::from_slice(&from_base64url(parts.next().unwrap()).unwrap()).unwrap();
        assert_eq!(claims.sub, user.into_uuid());
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, t0().timestamp() + 3600);
    }

    #[test]
    fn test_every_mutated_byte_fails_signature() {
        let tokens = service();
        let token = tokens.issue(UserId::new(), t0()).unwrap();

        for (i, c) in token.char_indices() {
            if c == '.' {
                continue;
            }
            let replacement = if c == 'A' { 'B' } else { 'A' };
            let mut mutated = token.clone();
            mutated.replace_range(i..i + 1, &replacement.to_string());

            assert_eq!(
                tokens.verify(&mutated, t0()),
                Err(AuthError::InvalidSignature),
                "mutation at byte {i} was not rejected"
            );
        }
    }

    #[test]
    fn test_other_secret_fails_signature() {
        let token = service().issue(UserId::new(), t0()).unwrap();
        let other = TokenService::new("other-secret", Duration::from_secs(3600)).unwrap();
        assert_eq!(other.verify(&token, t0()), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_malformed_shapes() {
        let tokens = service();
        for token in ["", "abc", "a.b", "a.b.c.d", "a..c", ".b.c", "a.b."] {
            assert_eq!(tokens.verify(token, t0()), Err(AuthError::Malformed), "{token:?}");
        }
    }

    #[test]
    fn test_undecodable_signature() {
        assert_eq!(service().verify("a.b.!!!", t0()), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_signed_but_malformed_content() {
        let tokens = service();
        let exp = t0().timestamp() + 60;

        let bad_alg = sign(
            r#"{"alg":"none","typ":"JWT"}"#,
            &format!(r#"{{"sub":"{}","iat":0,"exp":{exp}}}"#, Uuid::new_v4()),
        );
        assert_eq!(tokens.verify(&bad_alg, t0()), Err(AuthError::Malformed));

        let bad_sub = sign(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            &format!(r#"{{"sub":"ann","iat":0,"exp":{exp}}}"#),
        );
        assert_eq!(tokens.verify(&bad_sub, t0()), Err(AuthError::Malformed));

        let not_json = sign(r#"{"alg":"HS256"}"#, "not json");
        assert_eq!(tokens.verify(&not_json, t0()), Err(AuthError::Malformed));
    }
}
