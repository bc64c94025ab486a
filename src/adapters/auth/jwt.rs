//! HS256 JWT implementation of the `TokenService` port.
//!
//! Claims carry exactly what the access layer needs: subject id,
//! username, role. Tokens expire after a fixed window (7 days by
//! default) and there is no server-side revocation.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, Principal, Role, UserId};
use crate::ports::TokenService;

pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Claims stored in the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Username at issue time.
    pub username: String,
    /// Role name ("master" or "user").
    pub role: String,
    /// Expiration timestamp (seconds).
    pub exp: i64,
    /// Issued-at timestamp (seconds).
    pub iat: i64,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &SecretString, ttl_days: i64) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: Duration::days(ttl_days),
        }
    }
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn issue(&self, principal: &Principal) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal.id.to_string(),
            username: principal.username.clone(),
            role: principal.role.as_str().to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::GenerationFailed(e.to_string()))
    }

    async fn validate(&self, token: &str) -> Result<Principal, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        let claims = data.claims;
        let id: UserId = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        let role = Role::parse(&claims.role).ok_or(AuthError::InvalidToken)?;

        Ok(Principal::new(id, claims.username, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtTokenService {
        JwtTokenService::new(
            &SecretString::new("test-secret-at-least-32-characters-long".to_string()),
            DEFAULT_TOKEN_TTL_DAYS,
        )
    }

    fn principal() -> Principal {
        Principal::new(UserId::new(), "thiago", Role::Master)
    }

    #[tokio::test]
    async fn issued_token_validates_back_to_same_principal() {
        let svc = service();
        let p = principal();

        let token = svc.issue(&p).await.unwrap();
        let decoded = svc.validate(&token).await.unwrap();

        assert_eq!(decoded.id, p.id);
        assert_eq!(decoded.username, "thiago");
        assert_eq!(decoded.role, Role::Master);
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let svc = service();
        assert!(matches!(
            svc.validate("not.a.token").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn token_signed_with_other_key_is_rejected() {
        let svc = service();
        let other = JwtTokenService::new(
            &SecretString::new("a-completely-different-signing-secret!!".to_string()),
            DEFAULT_TOKEN_TTL_DAYS,
        );

        let token = other.issue(&principal()).await.unwrap();
        assert!(svc.validate(&token).await.is_err());
    }

    #[tokio::test]
    async fn expired_token_reports_expiry() {
        let svc = JwtTokenService::new(
            &SecretString::new("test-secret-at-least-32-characters-long".to_string()),
            -1,
        );
        let token = svc.issue(&principal()).await.unwrap();
        assert!(matches!(
            svc.validate(&token).await,
            Err(AuthError::TokenExpired)
        ));
    }

    #[tokio::test]
    async fn token_with_unknown_role_is_rejected() {
        let svc = service();
        let now = Utc::now();
        let claims = Claims {
            sub: UserId::new().to_string(),
            username: "thiago".to_string(),
            role: "superadmin".to_string(),
            exp: (now + Duration::days(1)).timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(&Header::default(), &claims, &svc.encoding_key).unwrap();
        assert!(matches!(
            svc.validate(&token).await,
            Err(AuthError::InvalidToken)
        ));
    }
}
