//! Route definitions for the PageHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route, bound to `state`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(content_block_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .with_state(state)
}

/// Auth endpoints: login, register, verify-email
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/verify-email", get(handlers::auth::verify_email))
}

/// User administration
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
}

/// Content blocks, addressed by `(page, section)`
fn content_block_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/blocks",
            get(handlers::content_block::get_block)
                .post(handlers::content_block::create_block)
                .put(handlers::content_block::update_block)
                .delete(handlers::content_block::delete_block),
        )
        .route("/blocks/page/{name}", get(handlers::content_block::get_page))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/ping", get(handlers::health::ping))
}
