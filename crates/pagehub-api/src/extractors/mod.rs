//! Custom Axum extractors.

pub mod locale;
pub mod validated;

pub use validated::{BindRejection, ValidatedJson, ValidatedQuery, validate_only};
