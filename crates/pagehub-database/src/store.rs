//! Shared in-process document store.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use pagehub_core::config::DatabaseConfig;
use pagehub_entity::content_block::{BlockKey, ContentBlock};
use pagehub_entity::user::User;

pub(crate) const USERS: &str = "users";
pub(crate) const CONTENT_BLOCKS: &str = "content_blocks";

#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) users: DashMap<Uuid, User>,
    /// Lowercased email -> user id.
    pub(crate) user_emails: DashMap<String, Uuid>,
    pub(crate) content_blocks: DashMap<BlockKey, ContentBlock>,
}

/// Handle to the document store; cheap to clone.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    name: Arc<str>,
    collections: Arc<Collections>,
}

impl DocumentStore {
    /// Opens the store named in the configuration.
    pub fn open(config: &DatabaseConfig) -> Self {
        info!(database = %config.name, "Opening document store");
        Self::named(&config.name)
    }

    /// Opens an empty store with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            collections: Arc::new(Collections::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn collections(&self) -> &Collections {
        &self.collections
    }
}
