//! User administration handlers.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use pagehub_core::i18n::keys;
use pagehub_core::types::PaginationQuery;
use pagehub_core::{AppError, Localizer};
use pagehub_service::user::dto::{
    CreateUserRequest, UpdateUserRequest, UserDto, UserIdRequest, UsersPage,
};

use crate::dto::ApiResponse;
use crate::extractors::{ValidatedJson, ValidatedQuery, validate_only};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedQuery(query): ValidatedQuery<PaginationQuery>,
) -> Result<ApiResponse<UsersPage>, AppError> {
    let page = state.user_service.list_users(query.into_page_request()).await?;
    Ok(ApiResponse::ok(fetched(&localizer), page))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    localizer: Localizer,
    Path(id): Path<String>,
) -> Result<ApiResponse<UserDto>, AppError> {
    let req = UserIdRequest::new(id);
    validate_only(&localizer, &req)?;

    let user = state.user_service.get_user(&localizer, req).await?;
    Ok(ApiResponse::ok(fetched(&localizer), user))
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<ApiResponse<UserDto>, AppError> {
    let user = state.user_service.create_user(&localizer, req).await?;
    Ok(ApiResponse::created(
        localizer.text_with(keys::RESOURCE_CREATED, &[keys::USER_RESOURCE]),
        user,
    ))
}

/// PUT /api/v1/users/{id}
///
/// The body's `id` must name the same user as the path.
pub async fn update_user(
    State(state): State<AppState>,
    localizer: Localizer,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<Response, AppError> {
    if id != req.id {
        return Ok(
            ApiResponse::<()>::bad_request(localizer.text(keys::ERR_UNMATCHED_ID), None)
                .into_response(),
        );
    }

    let user = state.user_service.update_user(&localizer, req).await?;
    Ok(ApiResponse::ok(
        localizer.text_with(keys::RESOURCE_UPDATED, &[keys::USER_RESOURCE]),
        user,
    )
    .into_response())
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    localizer: Localizer,
    Path(id): Path<String>,
) -> Result<ApiResponse, AppError> {
    let req = UserIdRequest::new(id);
    validate_only(&localizer, &req)?;

    state.user_service.delete_user(&localizer, req).await?;
    Ok(ApiResponse::no_content(
        localizer.text_with(keys::RESOURCE_DELETED, &[keys::USER_RESOURCE]),
    ))
}

fn fetched(localizer: &Localizer) -> String {
    localizer.text_with(keys::RESOURCE_FETCHED, &[keys::USER_RESOURCE])
}
