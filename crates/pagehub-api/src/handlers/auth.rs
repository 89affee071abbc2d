//! Authentication handlers: login, registration, email verification.

use axum::extract::State;

use pagehub_core::i18n::keys;
use pagehub_core::{AppError, Localizer};
use pagehub_service::auth::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyEmailRequest,
};

use crate::dto::ApiResponse;
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, AppError> {
    let token = state.auth_service.login(&localizer, req).await?;
    Ok(ApiResponse::ok(localizer.text(keys::LOGIN_SUCCESSFUL), token))
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<ApiResponse<RegisterResponse>, AppError> {
    let registered = state.auth_service.register(&localizer, req).await?;
    Ok(ApiResponse::created(
        localizer.text(keys::USER_REGISTERED),
        registered,
    ))
}

/// GET /api/v1/auth/verify-email?token=
pub async fn verify_email(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedQuery(req): ValidatedQuery<VerifyEmailRequest>,
) -> Result<ApiResponse, AppError> {
    state.auth_service.verify_email(&localizer, req).await?;
    Ok(ApiResponse::ok_message(localizer.text(keys::EMAIL_VERIFIED)))
}
