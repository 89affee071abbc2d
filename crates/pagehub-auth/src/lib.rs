//! # pagehub-auth
//!
//! Credential primitives for PageHub.
//!
//! ## Modules
//!
//! - `jwt`: login and email-verification token creation and validation
//! - `password`: Argon2id password hashing

pub mod error;
pub mod jwt;
pub mod password;

pub use error::AuthError;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
