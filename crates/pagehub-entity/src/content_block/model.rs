//! Content block entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pagehub_core::validation::rules;

/// Identity of a block: one section of one page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Validate)]
pub struct BlockKey {
    #[validate(custom(function = "rules::required_text"))]
    pub page: String,
    #[validate(custom(function = "rules::required_text"))]
    pub section: String,
}

impl BlockKey {
    pub fn new(page: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            section: section.into(),
        }
    }
}

/// A versioned piece of page content (HTML, Markdown, or plain text).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContentBlock {
    /// Unique document identifier.
    pub id: Uuid,
    /// Unique `(page, section)` key.
    #[validate(nested)]
    pub key: BlockKey,
    #[validate(custom(function = "rules::required_text"))]
    pub content: String,
    /// Starts at 1, incremented by every update.
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentBlock {
    /// A first version of a block.
    pub fn new(key: BlockKey, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            key,
            content: content.into(),
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the content, bumping the version and refreshing `updated_at`.
    pub fn revise(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.version = self.version.saturating_add(1);
        self.updated_at = Utc::now();
    }
}
