//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pagehub_core::validation::rules;

use super::role::UserRole;
use super::status::UserStatus;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email address, unique across users.
    #[validate(custom(function = "rules::required_text"))]
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    #[validate(custom(function = "rules::required_text"))]
    pub hashed_password: String,
    #[validate(custom(function = "rules::required_text"))]
    pub first_name: String,
    #[validate(custom(function = "rules::required_text"))]
    pub last_name: String,
    #[validate(custom(function = "rules::required_text"))]
    pub phone_number: String,
    /// Assigned role.
    pub role: UserRole,
    /// Verification state.
    pub status: UserStatus,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the email address has been verified.
    pub fn is_activated(&self) -> bool {
        self.status == UserStatus::Activated
    }

    /// Case-insensitive substring match over the searchable fields.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone_number,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    /// Pre-hashed password.
    pub hashed_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl CreateUser {
    /// Builds the stored document with a fresh id and timestamps.
    pub fn into_user(self) -> User {
        let now = Utc::now();
        User {
            id: Uuid::now_v7(),
            email: self.email,
            hashed_password: self.hashed_password,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            role: self.role,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}
