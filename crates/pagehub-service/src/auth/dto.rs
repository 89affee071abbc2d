//! Authentication request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pagehub_core::validation::rules;
use pagehub_entity::user::UserStatus;

/// `POST /auth/login`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(custom(function = "rules::required_text"), email)]
    pub email: String,
    #[validate(custom(function = "rules::required_text"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expiration_in_milliseconds: u64,
}

/// `POST /auth/register`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(custom(function = "rules::required_text"))]
    pub first_name: String,
    #[validate(custom(function = "rules::required_text"))]
    pub last_name: String,
    #[validate(custom(function = "rules::required_text"), email)]
    pub email: String,
    #[validate(custom(function = "rules::required_text"), length(min = 8))]
    pub password: String,
    #[validate(custom(function = "rules::required_text"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_status: UserStatus,
    /// Link the user follows to verify their email address.
    pub verification_url: String,
}

/// `GET /auth/verify-email?token=`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct VerifyEmailRequest {
    #[validate(custom(function = "rules::required_text"))]
    pub token: String,
}
