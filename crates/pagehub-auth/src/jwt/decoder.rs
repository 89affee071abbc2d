//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use pagehub_core::config::AuthConfig;

use super::claims::{Claims, TokenType};
use crate::error::AuthError;

/// Validates signed tokens and checks what they were issued for.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a login token.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_as(token, TokenType::Access)
    }

    /// Decodes and validates an email verification token.
    pub fn decode_verification_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode_as(token, TokenType::Verification)
    }

    fn decode_as(&self, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e),
            })?
            .claims;

        if claims.token_type != expected {
            debug!(user_id = %claims.sub, ?expected, actual = ?claims.token_type, "Token type mismatch");
            return Err(AuthError::WrongTokenType { expected });
        }
        Ok(claims)
    }
}
