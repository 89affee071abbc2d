//! Content block domain entities.

pub mod model;

pub use model::{BlockKey, ContentBlock};
