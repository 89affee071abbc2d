//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use pagehub_core::config::AuthConfig;

use super::claims::{Claims, TokenType};
use crate::error::AuthError;

/// Creates signed login and verification tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Login token TTL in milliseconds.
    access_ttl_ms: u64,
    /// Verification token TTL in hours.
    verification_ttl_hours: u64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_ms", &self.access_ttl_ms)
            .field("verification_ttl_hours", &self.verification_ttl_hours)
            .finish()
    }
}

/// A signed login token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    /// Lifetime the token was issued with.
    pub expiration_in_milliseconds: u64,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_ms: config.jwt_expiration_ms,
            verification_ttl_hours: config.verification_ttl_hours,
        }
    }

    /// Generates a login token for the given user.
    pub fn generate_access_token(&self, user_id: Uuid, email: &str) -> Result<IssuedToken, AuthError> {
        let ttl = i64::try_from(self.access_ttl_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX);
        let (token, expires_at) = self.sign(user_id, email, TokenType::Access, ttl)?;

        Ok(IssuedToken {
            token,
            expires_at,
            expiration_in_milliseconds: self.access_ttl_ms,
        })
    }

    /// Generates the token embedded in an email verification link.
    pub fn generate_verification_token(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        let ttl = i64::try_from(self.verification_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .unwrap_or(Duration::MAX);
        self.sign(user_id, email, TokenType::Verification, ttl)
            .map(|(token, _)| token)
    }

    fn sign(
        &self,
        user_id: Uuid,
        email: &str,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<(String, DateTime<Utc>), AuthError> {
        let now = Utc::now();
        let exp = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(AuthError::Encoding)?;
        Ok((token, exp))
    }
}
