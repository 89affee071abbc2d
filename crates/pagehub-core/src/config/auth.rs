//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and account verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Login token lifetime in milliseconds.
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration_ms: u64,
    /// Email verification token lifetime in hours.
    #[serde(default = "default_verification_ttl")]
    pub verification_ttl_hours: u64,
    /// Base URL of the email verification page; the token is appended as `?token=`.
    #[serde(default = "default_verification_url")]
    pub verification_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_expiration_ms: default_jwt_expiration(),
            verification_ttl_hours: default_verification_ttl(),
            verification_url: default_verification_url(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_expiration() -> u64 {
    3_600_000
}

fn default_verification_ttl() -> u64 {
    24
}

fn default_verification_url() -> String {
    "https://example.com/verify".to_string()
}
