//! Credential checks and account lifecycle.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use pagehub_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use pagehub_core::i18n::keys;
use pagehub_core::validation::validate_struct;
use pagehub_core::{AppResult, HttpError, Localizer};
use pagehub_database::StoreError;
use pagehub_database::repositories::UserRepository;
use pagehub_entity::user::model::CreateUser;
use pagehub_entity::user::{UserRole, UserStatus};

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyEmailRequest};

/// Handles login, self-registration, and email verification.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token signer.
    encoder: Arc<JwtEncoder>,
    /// Token validator.
    decoder: Arc<JwtDecoder>,
    /// Base of the verification link.
    verification_url: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        verification_url: impl Into<String>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
            verification_url: verification_url.into(),
        }
    }

    /// Exchanges email and password for a signed login token.
    pub async fn login(&self, localizer: &Localizer, req: LoginRequest) -> AppResult<LoginResponse> {
        let invalid_credentials =
            || HttpError::unauthorized_with_key(localizer, keys::ERR_INVALID_CREDENTIALS);

        let user = self
            .user_repo
            .find_by_email(&req.email)
            .await
            .ok_or_else(invalid_credentials)?;

        let valid = self
            .hasher
            .verify_password(&req.password, &user.hashed_password)
            .map_err(|e| HttpError::internal_server_error(localizer).caused_by(e))?;
        if !valid {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(invalid_credentials().into());
        }

        let issued = self
            .encoder
            .generate_access_token(user.id, &user.email)
            .map_err(|e| {
                HttpError::internal_server_error_with_key(localizer, keys::ERR_TOKEN_GENERATION)
                    .caused_by(e)
            })?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse {
            token: issued.token,
            expiration_in_milliseconds: issued.expiration_in_milliseconds,
        })
    }

    /// Creates a pending account and returns its verification link.
    pub async fn register(
        &self,
        localizer: &Localizer,
        req: RegisterRequest,
    ) -> AppResult<RegisterResponse> {
        let email_taken = || HttpError::bad_request_with_key(localizer, keys::ERR_EMAIL_ALREADY_USED);

        if self.user_repo.find_by_email(&req.email).await.is_some() {
            return Err(email_taken().into());
        }

        let hashed_password = self.hasher.hash_password(&req.password).map_err(|e| {
            HttpError::internal_server_error_with_key(localizer, keys::ERR_PASSWORD_HASHING)
                .caused_by(e)
        })?;

        let user = CreateUser {
            email: req.email,
            hashed_password,
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            role: UserRole::User,
            status: UserStatus::Pending,
        }
        .into_user();
        validate_struct(localizer, &user)?;

        let user = self.user_repo.create(user).await.map_err(|e| match e {
            StoreError::Duplicate { .. } => email_taken().caused_by(e),
            StoreError::NotFound { .. } => {
                HttpError::internal_server_error_with_key(localizer, keys::ERR_USER_CREATION)
                    .caused_by(e)
            }
        })?;

        let token = self
            .encoder
            .generate_verification_token(user.id, &user.email)
            .map_err(|e| {
                HttpError::internal_server_error_with_key(localizer, keys::ERR_TOKEN_GENERATION)
                    .caused_by(e)
            })?;

        info!(user_id = %user.id, "User registered");
        Ok(RegisterResponse {
            user_status: user.status,
            verification_url: format!("{}?token={token}", self.verification_url),
        })
    }

    /// Activates the account named by a verification token.
    pub async fn verify_email(&self, localizer: &Localizer, req: VerifyEmailRequest) -> AppResult<()> {
        let claims = self
            .decoder
            .decode_verification_token(&req.token)
            .map_err(|e| HttpError::bad_request_with_key(localizer, keys::ERR_INVALID_TOKEN).caused_by(e))?;

        let mut user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await
            .ok_or_else(|| HttpError::bad_request_with_key(localizer, keys::ERR_INVALID_USER))?;

        user.status = UserStatus::Activated;
        user.updated_at = Utc::now();
        self.user_repo.update(user).await.map_err(|e| {
            HttpError::internal_server_error_with_key(localizer, keys::ERR_USER_UPDATE).caused_by(e)
        })?;

        info!(user_id = %claims.user_id(), "Email verified");
        Ok(())
    }
}
