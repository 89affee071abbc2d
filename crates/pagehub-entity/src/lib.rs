//! # pagehub-entity
//!
//! Domain entity models for PageHub. Every struct in this crate is a stored
//! document or a domain value object. Stored documents derive `Validate` and
//! are checked before they are written.

pub mod content_block;
pub mod user;

use thiserror::Error;

/// A string did not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{value}'. Expected one of: {expected}")]
pub struct UnknownVariant {
    /// What was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted values.
    pub expected: &'static str,
}
