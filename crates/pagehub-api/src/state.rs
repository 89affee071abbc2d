//! Shared application state passed to all handlers via Axum's `State` extractor.

use std::sync::Arc;

use pagehub_core::LocaleStore;
use pagehub_core::config::AppConfig;
use pagehub_service::{AuthService, ContentBlockService, UserService};

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration, built once at startup.
    pub config: Arc<AppConfig>,
    /// Message catalog used to negotiate each request's locale.
    pub locales: Arc<LocaleStore>,

    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub content_block_service: Arc<ContentBlockService>,
}
