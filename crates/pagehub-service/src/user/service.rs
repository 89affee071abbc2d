//! User administration: create, update, delete, and browse accounts.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use pagehub_auth::PasswordHasher;
use pagehub_core::i18n::keys;
use pagehub_core::types::{PageMeta, PageRequest};
use pagehub_core::validation::validate_struct;
use pagehub_core::{AppResult, ErrorKind, HttpError, Localizer};
use pagehub_database::repositories::UserRepository;
use pagehub_entity::user::model::CreateUser;
use pagehub_entity::user::{UserRole, UserStatus};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto, UserIdRequest, UsersPage};
use crate::store_error;

/// Handles administrative user operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Creates an account with the requested role.
    pub async fn create_user(&self, localizer: &Localizer, req: CreateUserRequest) -> AppResult<UserDto> {
        if self.user_repo.find_by_email(&req.email).await.is_some() {
            return Err(HttpError::localized(
                ErrorKind::Conflict,
                localizer,
                keys::ERR_RESOURCE_EXISTS,
                &[keys::USER_RESOURCE],
            )
            .into());
        }

        let role: UserRole = req
            .role
            .parse()
            .map_err(|e| HttpError::bad_request(localizer).caused_by(e))?;
        let hashed_password = self.hash(localizer, &req.password)?;

        let user = CreateUser {
            email: req.email,
            hashed_password,
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            role,
            status: UserStatus::Pending,
        }
        .into_user();
        validate_struct(localizer, &user)?;

        let user = self
            .user_repo
            .create(user)
            .await
            .map_err(|e| store_error::into_http(localizer, keys::USER_RESOURCE, e))?;

        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user.into())
    }

    /// Replaces the profile fields of an existing account.
    pub async fn update_user(&self, localizer: &Localizer, req: UpdateUserRequest) -> AppResult<UserDto> {
        let id = parse_id(localizer, &req.id)?;
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await
            .ok_or_else(|| store_error::not_found(localizer, keys::USER_RESOURCE))?;

        user.first_name = req.first_name;
        user.last_name = req.last_name;
        user.email = req.email;
        user.phone_number = req.phone_number;
        if let Some(password) = req.password.as_deref() {
            user.hashed_password = self.hash(localizer, password)?;
        }
        user.updated_at = Utc::now();
        validate_struct(localizer, &user)?;

        let user = self
            .user_repo
            .update(user)
            .await
            .map_err(|e| store_error::into_http(localizer, keys::USER_RESOURCE, e))?;

        info!(user_id = %user.id, "User updated");
        Ok(user.into())
    }

    /// Deletes an account.
    pub async fn delete_user(&self, localizer: &Localizer, req: UserIdRequest) -> AppResult<()> {
        let id = parse_id(localizer, &req.id)?;
        self.user_repo
            .delete(id)
            .await
            .map_err(|e| store_error::into_http(localizer, keys::USER_RESOURCE, e))?;

        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Fetches one account.
    pub async fn get_user(&self, localizer: &Localizer, req: UserIdRequest) -> AppResult<UserDto> {
        let id = parse_id(localizer, &req.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await
            .ok_or_else(|| store_error::not_found(localizer, keys::USER_RESOURCE))?;
        Ok(user.into())
    }

    /// Filters, sorts, and pages through all accounts.
    pub async fn list_users(&self, page: PageRequest) -> AppResult<UsersPage> {
        let (users, total) = self.user_repo.find_paginated(&page).await;
        Ok(UsersPage {
            users: users.into_iter().map(UserDto::from).collect(),
            pagination: PageMeta::new(&page, total),
        })
    }

    fn hash(&self, localizer: &Localizer, password: &str) -> Result<String, HttpError> {
        self.hasher.hash_password(password).map_err(|e| {
            HttpError::internal_server_error_with_key(localizer, keys::ERR_PASSWORD_HASHING)
                .caused_by(e)
        })
    }
}

fn parse_id(localizer: &Localizer, id: &str) -> Result<Uuid, HttpError> {
    Uuid::parse_str(id).map_err(|e| HttpError::bad_request(localizer).caused_by(e))
}
