//! Request binding: decode, then validate.
//!
//! [`ValidatedJson`] and [`ValidatedQuery`] reject the request before the
//! handler runs; the rejection is the complete response. Decode failures
//! carry fixed English text, validation failures go through the localized
//! 422 error.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use validator::Validate;

use pagehub_core::validation::validate_struct;
use pagehub_core::{AppError, ErrorKind, HttpError, Localizer};

use super::locale::localizer_for;
use crate::state::AppState;

pub const INVALID_JSON_PAYLOAD: &str = "Invalid JSON payload";
pub const INVALID_QUERY_PARAMETERS: &str = "Invalid query parameters";

/// Why a request never reached its handler.
#[derive(Debug)]
pub enum BindRejection {
    /// The body could not be read at all, e.g. it exceeds the size limit.
    Body(BytesRejection),
    /// The body is not JSON of the expected shape.
    InvalidJson(serde_json::Error),
    /// The query string does not decode into the expected shape.
    InvalidQuery(QueryRejection),
    /// Decoded, but one or more fields broke their constraints.
    Invalid(HttpError),
}

impl IntoResponse for BindRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Body(rejection) => decode_failure(INVALID_JSON_PAYLOAD, rejection.body_text()),
            Self::InvalidJson(err) => decode_failure(INVALID_JSON_PAYLOAD, err.to_string()),
            Self::InvalidQuery(rejection) => {
                decode_failure(INVALID_QUERY_PARAMETERS, rejection.body_text())
            }
            Self::Invalid(err) => err.render(),
        }
    }
}

fn decode_failure(message: &'static str, detail: String) -> Response {
    HttpError::new(ErrorKind::BadRequest, message)
        .caused_by(detail)
        .render()
}

/// JSON body decoded into `T` and validated.
///
/// The body is decoded whatever its `Content-Type`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = BindRejection;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let localizer = localizer_for(req.headers(), &state.locales);
        let body = Bytes::from_request(req, state)
            .await
            .map_err(BindRejection::Body)?;

        let value: T = serde_json::from_slice(&body).map_err(BindRejection::InvalidJson)?;
        validate_struct(&localizer, &value).map_err(BindRejection::Invalid)?;
        Ok(Self(value))
    }
}

/// Query string decoded into `T` and validated.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T> FromRequestParts<AppState> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = BindRejection;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri).map_err(BindRejection::InvalidQuery)?;
        let localizer = localizer_for(&parts.headers, &state.locales);
        validate_struct(&localizer, &value).map_err(BindRejection::Invalid)?;
        Ok(Self(value))
    }
}

/// Validates a value the handler assembled itself, e.g. from path segments.
pub fn validate_only<T: Validate>(localizer: &Localizer, target: &T) -> Result<(), AppError> {
    validate_struct(localizer, target).map_err(AppError::from)
}
