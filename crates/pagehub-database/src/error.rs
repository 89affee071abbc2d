//! Document store failures.

use thiserror::Error;

/// A write could not be applied to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A unique key is already taken.
    #[error("duplicate key in collection '{collection}': {key}")]
    Duplicate {
        /// Collection name.
        collection: &'static str,
        /// The conflicting key.
        key: String,
    },
    /// No document matches the key.
    #[error("no document in collection '{collection}' matches {key}")]
    NotFound {
        /// Collection name.
        collection: &'static str,
        /// The missing key.
        key: String,
    },
}
