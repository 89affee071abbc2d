//! Login, registration, and email verification.

pub mod dto;
pub mod service;

pub use service::AuthService;
