//! # pagehub-api
//!
//! HTTP API layer for PageHub built on Axum.
//!
//! Provides the REST endpoints, the locale and binding extractors, the
//! response envelope, and middleware (CORS, request logging).

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
