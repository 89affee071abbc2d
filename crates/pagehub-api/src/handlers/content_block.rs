//! Content block handlers.

use axum::extract::{Path, State};

use pagehub_core::i18n::keys;
use pagehub_core::{AppError, Localizer};
use pagehub_service::content_block::dto::{
    BlockKeyRequest, ContentBlockDto, ContentBlockRequest, PageBlocksDto, PageBlocksRequest,
};

use crate::dto::ApiResponse;
use crate::extractors::{ValidatedJson, ValidatedQuery, validate_only};
use crate::state::AppState;

/// GET /api/v1/blocks/page/{name}
pub async fn get_page(
    State(state): State<AppState>,
    localizer: Localizer,
    Path(name): Path<String>,
) -> Result<ApiResponse<PageBlocksDto>, AppError> {
    let req = PageBlocksRequest { page: name };
    validate_only(&localizer, &req)?;

    let page = state.content_block_service.get_page(req).await?;
    Ok(ApiResponse::ok(message(&localizer, keys::RESOURCE_FETCHED), page))
}

/// GET /api/v1/blocks?page=&section=
pub async fn get_block(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedQuery(req): ValidatedQuery<BlockKeyRequest>,
) -> Result<ApiResponse<ContentBlockDto>, AppError> {
    let block = state.content_block_service.get_block(&localizer, req).await?;
    Ok(ApiResponse::ok(message(&localizer, keys::RESOURCE_FETCHED), block))
}

/// POST /api/v1/blocks
pub async fn create_block(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedJson(req): ValidatedJson<ContentBlockRequest>,
) -> Result<ApiResponse<ContentBlockDto>, AppError> {
    let block = state.content_block_service.create_block(&localizer, req).await?;
    Ok(ApiResponse::created(message(&localizer, keys::RESOURCE_CREATED), block))
}

/// PUT /api/v1/blocks
pub async fn update_block(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedJson(req): ValidatedJson<ContentBlockRequest>,
) -> Result<ApiResponse<ContentBlockDto>, AppError> {
    let block = state.content_block_service.update_block(&localizer, req).await?;
    Ok(ApiResponse::ok(message(&localizer, keys::RESOURCE_UPDATED), block))
}

/// DELETE /api/v1/blocks?page=&section=
pub async fn delete_block(
    State(state): State<AppState>,
    localizer: Localizer,
    ValidatedQuery(req): ValidatedQuery<BlockKeyRequest>,
) -> Result<ApiResponse, AppError> {
    state.content_block_service.delete_block(&localizer, req).await?;
    Ok(ApiResponse::no_content(message(&localizer, keys::RESOURCE_DELETED)))
}

fn message(localizer: &Localizer, key: &str) -> String {
    localizer.text_with(key, &[keys::CONTENT_BLOCK_RESOURCE])
}
