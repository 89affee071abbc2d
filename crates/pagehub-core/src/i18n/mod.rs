//! Localized message catalog.
//!
//! The [`LocaleStore`] holds the process-wide `locale -> key -> template`
//! table loaded at startup. Lookups always name the locale explicitly; the
//! per-request locale travels in a [`Localizer`] handle instead of a shared
//! mutable variable, so concurrent requests never observe each other's
//! language.

pub mod keys;
mod localizer;
mod store;

pub use localizer::Localizer;
pub use store::{LoadError, LocaleStore};
