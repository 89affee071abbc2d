//! Content block use cases.

use std::sync::Arc;

use tracing::info;

use pagehub_core::i18n::keys;
use pagehub_core::validation::validate_struct;
use pagehub_core::{AppResult, Localizer};
use pagehub_database::repositories::ContentBlockRepository;
use pagehub_entity::content_block::{BlockKey, ContentBlock};

use super::dto::{BlockKeyRequest, ContentBlockDto, ContentBlockRequest, PageBlocksDto, PageBlocksRequest};
use crate::store_error;

/// Creates, revises, and serves page content blocks.
#[derive(Debug, Clone)]
pub struct ContentBlockService {
    block_repo: Arc<ContentBlockRepository>,
}

impl ContentBlockService {
    /// Creates a new content block service.
    pub fn new(block_repo: Arc<ContentBlockRepository>) -> Self {
        Self { block_repo }
    }

    /// Stores the first version of a block.
    pub async fn create_block(
        &self,
        localizer: &Localizer,
        req: ContentBlockRequest,
    ) -> AppResult<ContentBlockDto> {
        let block = ContentBlock::new(req.key(), req.content);
        validate_struct(localizer, &block)?;

        let block = self
            .block_repo
            .create(block)
            .await
            .map_err(|e| store_error::into_http(localizer, keys::CONTENT_BLOCK_RESOURCE, e))?;

        info!(page = %block.key.page, section = %block.key.section, "Content block created");
        Ok(block.into())
    }

    /// Stores a new version of an existing block.
    pub async fn update_block(
        &self,
        localizer: &Localizer,
        req: ContentBlockRequest,
    ) -> AppResult<ContentBlockDto> {
        let candidate = ContentBlock::new(req.key(), req.content);
        validate_struct(localizer, &candidate)?;

        let block = self
            .block_repo
            .revise(&candidate.key, &candidate.content)
            .await
            .map_err(|e| store_error::into_http(localizer, keys::CONTENT_BLOCK_RESOURCE, e))?;

        info!(
            page = %block.key.page,
            section = %block.key.section,
            version = block.version,
            "Content block updated"
        );
        Ok(block.into())
    }

    /// Removes a block.
    pub async fn delete_block(&self, localizer: &Localizer, req: BlockKeyRequest) -> AppResult<()> {
        let key = BlockKey::from(req);
        self.block_repo
            .delete(&key)
            .await
            .map_err(|e| store_error::into_http(localizer, keys::CONTENT_BLOCK_RESOURCE, e))?;

        info!(page = %key.page, section = %key.section, "Content block deleted");
        Ok(())
    }

    /// Fetches one block.
    pub async fn get_block(
        &self,
        localizer: &Localizer,
        req: BlockKeyRequest,
    ) -> AppResult<ContentBlockDto> {
        let key = BlockKey::from(req);
        let block = self
            .block_repo
            .find(&key)
            .await
            .ok_or_else(|| store_error::not_found(localizer, keys::CONTENT_BLOCK_RESOURCE))?;
        Ok(block.into())
    }

    /// Fetches every block of a page; an unknown page has no blocks.
    pub async fn get_page(&self, req: PageBlocksRequest) -> AppResult<PageBlocksDto> {
        let blocks = self.block_repo.find_by_page(&req.page).await;
        Ok(PageBlocksDto {
            blocks: blocks.into_iter().map(ContentBlockDto::from).collect(),
        })
    }
}
