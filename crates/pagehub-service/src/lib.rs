//! # pagehub-service
//!
//! Business logic service layer for PageHub. Each service owns the request
//! DTOs of its use cases, validates entities before they are stored, and
//! reports failures as localized [`pagehub_core::HttpError`]s.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod content_block;
mod store_error;
pub mod user;

pub use auth::AuthService;
pub use content_block::ContentBlockService;
pub use user::UserService;
