//! Content block repository implementation.

use dashmap::mapref::entry::Entry;
use tracing::debug;

use pagehub_entity::content_block::{BlockKey, ContentBlock};

use crate::error::StoreError;
use crate::store::{CONTENT_BLOCKS, DocumentStore};

/// Repository for content blocks, keyed by `(page, section)`.
#[derive(Debug, Clone)]
pub struct ContentBlockRepository {
    store: DocumentStore,
}

impl ContentBlockRepository {
    /// Create a new content block repository.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Insert a new block; its key must not exist yet.
    pub async fn create(&self, block: ContentBlock) -> Result<ContentBlock, StoreError> {
        match self
            .store
            .collections()
            .content_blocks
            .entry(block.key.clone())
        {
            Entry::Occupied(_) => Err(StoreError::Duplicate {
                collection: CONTENT_BLOCKS,
                key: describe(&block.key),
            }),
            Entry::Vacant(slot) => {
                debug!(page = %block.key.page, section = %block.key.section, "Content block inserted");
                slot.insert(block.clone());
                Ok(block)
            }
        }
    }

    /// Find one block by key.
    pub async fn find(&self, key: &BlockKey) -> Option<ContentBlock> {
        self.store
            .collections()
            .content_blocks
            .get(key)
            .map(|block| block.value().clone())
    }

    /// All blocks of a page, ordered by section.
    pub async fn find_by_page(&self, page: &str) -> Vec<ContentBlock> {
        let mut blocks: Vec<ContentBlock> = self
            .store
            .collections()
            .content_blocks
            .iter()
            .filter(|entry| entry.key().page == page)
            .map(|entry| entry.value().clone())
            .collect();
        blocks.sort_by(|a, b| a.key.section.cmp(&b.key.section));
        blocks
    }

    /// Stores a new revision of `key`'s content and returns the result.
    ///
    /// The version bump happens under the entry's write lock, so concurrent
    /// updates never reuse a version number.
    pub async fn revise(&self, key: &BlockKey, content: &str) -> Result<ContentBlock, StoreError> {
        let mut stored = self
            .store
            .collections()
            .content_blocks
            .get_mut(key)
            .ok_or_else(|| StoreError::NotFound {
                collection: CONTENT_BLOCKS,
                key: describe(key),
            })?;

        stored.revise(content);
        debug!(page = %key.page, section = %key.section, version = stored.version, "Content block revised");
        Ok(stored.clone())
    }

    /// Delete a block by key.
    pub async fn delete(&self, key: &BlockKey) -> Result<(), StoreError> {
        self.store
            .collections()
            .content_blocks
            .remove(key)
            .map(|_| debug!(page = %key.page, section = %key.section, "Content block deleted"))
            .ok_or_else(|| StoreError::NotFound {
                collection: CONTENT_BLOCKS,
                key: describe(key),
            })
    }
}

fn describe(key: &BlockKey) -> String {
    format!("{}/{}", key.page, key.section)
}
