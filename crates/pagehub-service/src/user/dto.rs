//! User request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use pagehub_core::types::PageMeta;
use pagehub_core::validation::rules;
use pagehub_entity::user::{User, UserRole, UserStatus};

/// `POST /users`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(custom(function = "rules::required_text"), email)]
    pub email: String,
    #[validate(custom(function = "rules::required_text"), length(min = 8, max = 128))]
    pub password: String,
    #[validate(custom(function = "rules::required_text"), length(min = 2, max = 50))]
    pub first_name: String,
    #[validate(custom(function = "rules::required_text"), length(min = 2, max = 50))]
    pub last_name: String,
    #[validate(custom(function = "rules::required_text"), custom(function = "rules::e164"))]
    pub phone_number: String,
    #[validate(
        custom(function = "rules::required_text"),
        custom(function = "rules::one_of_user_role")
    )]
    pub role: String,
}

/// `PUT /users/{id}`
///
/// The body repeats the id; it must match the path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "rules::required_text"), custom(function = "rules::uuid_text"))]
    pub id: String,
    #[validate(custom(function = "rules::required_text"), length(min = 2, max = 50))]
    pub first_name: String,
    #[validate(custom(function = "rules::required_text"), length(min = 2, max = 50))]
    pub last_name: String,
    /// Replaced only when present.
    #[validate(length(min = 8, max = 100))]
    pub password: Option<String>,
    #[validate(custom(function = "rules::required_text"), email)]
    pub email: String,
    #[validate(custom(function = "rules::required_text"), length(equal = 11))]
    pub phone_number: String,
}

/// Path parameter of `/users/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserIdRequest {
    #[validate(custom(function = "rules::required_text"), custom(function = "rules::uuid_text"))]
    pub id: String,
}

impl UserIdRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            role: user.role,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// `GET /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<UserDto>,
    pub pagination: PageMeta,
}
