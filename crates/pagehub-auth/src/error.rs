//! Credential failures.

use thiserror::Error;

use crate::jwt::claims::TokenType;

/// Failure while hashing, signing, or validating credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Argon2 could not hash the password.
    #[error("password hashing failed: {0}")]
    Hashing(String),
    /// The stored hash is not a valid PHC string.
    #[error("invalid password hash format: {0}")]
    MalformedHash(String),
    /// The token could not be signed.
    #[error("failed to encode token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
    /// The token is past its expiry.
    #[error("token has expired")]
    Expired,
    /// Bad signature, bad format, or bad claims.
    #[error("token validation failed: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    /// A valid token issued for another purpose.
    #[error("invalid token type: expected {expected:?} token")]
    WrongTokenType {
        /// The type the caller asked for.
        expected: TokenType,
    },
}
