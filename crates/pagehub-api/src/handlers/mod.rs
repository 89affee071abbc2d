//! Route handlers organized by domain.

pub mod auth;
pub mod content_block;
pub mod health;
pub mod user;
