//! Translation of document store failures into the HTTP taxonomy.

use pagehub_core::i18n::keys;
use pagehub_core::{ErrorKind, HttpError, Localizer};
use pagehub_database::StoreError;

/// Maps a failed write on `resource` (a resource name key) to its HTTP error.
pub(crate) fn into_http(localizer: &Localizer, resource: &str, err: StoreError) -> HttpError {
    let (kind, key) = match err {
        StoreError::Duplicate { .. } => (ErrorKind::Conflict, keys::ERR_RESOURCE_EXISTS),
        StoreError::NotFound { .. } => (ErrorKind::NotFound, keys::ERR_RESOURCE_NOT_FOUND),
    };
    HttpError::localized(kind, localizer, key, &[resource]).caused_by(err)
}

/// `err_resource_not_found` for `resource`.
pub(crate) fn not_found(localizer: &Localizer, resource: &str) -> HttpError {
    HttpError::localized(
        ErrorKind::NotFound,
        localizer,
        keys::ERR_RESOURCE_NOT_FOUND,
        &[resource],
    )
}
