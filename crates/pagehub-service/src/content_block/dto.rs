//! Content block request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use pagehub_core::validation::rules;
use pagehub_entity::content_block::{BlockKey, ContentBlock};

/// `POST /blocks` and `PUT /blocks`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContentBlockRequest {
    #[validate(custom(function = "rules::required_text"))]
    pub page: String,
    #[validate(custom(function = "rules::required_text"))]
    pub section: String,
    /// HTML, Markdown, or plain text.
    #[validate(custom(function = "rules::required_text"))]
    pub content: String,
}

impl ContentBlockRequest {
    pub fn key(&self) -> BlockKey {
        BlockKey::new(self.page.clone(), self.section.clone())
    }
}

/// Query string of `GET /blocks` and `DELETE /blocks`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct BlockKeyRequest {
    #[validate(custom(function = "rules::required_text"))]
    pub page: String,
    #[validate(custom(function = "rules::required_text"))]
    pub section: String,
}

impl From<BlockKeyRequest> for BlockKey {
    fn from(req: BlockKeyRequest) -> Self {
        BlockKey::new(req.page, req.section)
    }
}

/// Path parameter of `GET /blocks/page/{name}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageBlocksRequest {
    #[validate(custom(function = "rules::required_text"))]
    pub page: String,
}

/// Public view of a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlockDto {
    pub page: String,
    pub section: String,
    pub content: String,
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentBlock> for ContentBlockDto {
    fn from(block: ContentBlock) -> Self {
        Self {
            page: block.key.page,
            section: block.key.section,
            content: block.content,
            version: block.version,
            created_at: block.created_at,
            updated_at: block.updated_at,
        }
    }
}

/// All blocks of one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBlocksDto {
    pub blocks: Vec<ContentBlockDto>,
}
