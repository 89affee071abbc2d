//! # pagehub-database
//!
//! In-process document store and the concrete repositories for every
//! PageHub collection.

pub mod error;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::DocumentStore;
