//! Repository implementations for all PageHub collections.

pub mod content_block;
pub mod user;

pub use content_block::ContentBlockRepository;
pub use user::UserRepository;
