//! # pagehub-core
//!
//! Core crate for PageHub. Contains the configuration schema, the
//! localization store, the request validation engine, pagination types,
//! and the HTTP error taxonomy together with its JSON renderer.
//!
//! This crate has **no** internal dependencies on other PageHub crates.

pub mod config;
pub mod error;
pub mod i18n;
pub mod result;
pub mod types;
pub mod validation;

pub use error::{AppError, ErrorKind, HttpError};
pub use i18n::{LocaleStore, Localizer};
pub use result::AppResult;
pub use validation::ValidationFailure;
