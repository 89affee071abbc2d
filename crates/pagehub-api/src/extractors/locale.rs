//! Per-request locale negotiation.
//!
//! Every handler that renders text takes a [`Localizer`] argument; it is
//! built from the request's `Accept-Language` header against the shared
//! catalog, so concurrent requests never see each other's language.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;

use pagehub_core::{LocaleStore, Localizer};

use crate::state::AppState;

impl FromRequestParts<AppState> for Localizer {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(localizer_for(&parts.headers, &state.locales))
    }
}

/// Negotiates the locale for a set of request headers.
///
/// A header that is not valid visible ASCII counts as absent.
pub fn localizer_for(headers: &HeaderMap, locales: &Arc<LocaleStore>) -> Localizer {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    Localizer::negotiate(Arc::clone(locales), accept_language)
}
