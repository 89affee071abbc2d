//! Application builder: wires repositories, services, and the router.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use pagehub_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use pagehub_core::LocaleStore;
use pagehub_core::config::AppConfig;
use pagehub_database::DocumentStore;
use pagehub_database::repositories::{ContentBlockRepository, UserRepository};
use pagehub_service::{AuthService, ContentBlockService, UserService};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state over an already opened store.
pub fn build_state(
    config: Arc<AppConfig>,
    locales: Arc<LocaleStore>,
    store: DocumentStore,
) -> AppState {
    let user_repo = Arc::new(UserRepository::new(store.clone()));
    let block_repo = Arc::new(ContentBlockRepository::new(store));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        jwt_encoder,
        jwt_decoder,
        config.auth.verification_url.clone(),
    ));
    let user_service = Arc::new(UserService::new(user_repo, password_hasher));
    let content_block_service = Arc::new(ContentBlockService::new(block_repo));

    AppState {
        config,
        locales,
        auth_service,
        user_service,
        content_block_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&server.cors))
        .layer(from_fn(request_logging))
}

/// Opens the store, binds the listener, and serves until Ctrl-C.
pub async fn run_server(config: Arc<AppConfig>, locales: Arc<LocaleStore>) -> anyhow::Result<()> {
    let store = DocumentStore::open(&config.database);
    info!(database = store.name(), "Document store opened");

    let address = config.server.bind_address();
    let state = build_state(Arc::clone(&config), locales, store);
    let app = build_app(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "PageHub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
