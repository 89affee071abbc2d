//! HTTP error taxonomy and its JSON renderer.
//!
//! Every failure that reaches the transport boundary is an [`AppError`]:
//! either a classified [`HttpError`] (status + localized message + optional
//! cause + optional field detail) or an unclassified [`anyhow::Error`] that
//! degrades to a generic 500.

use std::error::Error as StdError;
use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, error};

use crate::i18n::{Localizer, keys};
use crate::validation::ValidationFailure;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The closed set of renderable error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested resource does not exist.
    NotFound,
    /// Missing or invalid credentials.
    Unauthorized,
    /// Authenticated but not allowed.
    Forbidden,
    /// The request is malformed or breaks a business rule.
    BadRequest,
    /// Unexpected failure on our side.
    InternalServerError,
    /// The resource already exists or changed concurrently.
    Conflict,
    /// Well-formed but semantically unacceptable.
    UnprocessableEntity,
    /// One or more field constraints failed.
    ValidationErrors,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Conflict => StatusCode::CONFLICT,
            Self::UnprocessableEntity | Self::ValidationErrors => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Message key used when the caller does not supply one.
    pub fn default_key(self) -> &'static str {
        match self {
            Self::NotFound => keys::NOT_FOUND,
            Self::Unauthorized => keys::UNAUTHORIZED,
            Self::Forbidden => keys::FORBIDDEN,
            Self::BadRequest => keys::BAD_REQUEST,
            Self::InternalServerError => keys::INTERNAL_SERVER_ERROR,
            Self::Conflict => keys::CONFLICT,
            Self::UnprocessableEntity => keys::UNPROCESSABLE_ENTITY,
            Self::ValidationErrors => keys::VALIDATION_FAILED,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::InternalServerError => write!(f, "INTERNAL_SERVER_ERROR"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::UnprocessableEntity => write!(f, "UNPROCESSABLE_ENTITY"),
            Self::ValidationErrors => write!(f, "VALIDATION_ERRORS"),
        }
    }
}

/// A classified error with an already-localized message.
///
/// `Display` yields the wrapped cause's text when there is one, otherwise the
/// localized message. Logs therefore see the raw cause while the rendered
/// body leads with the localized text.
#[derive(Debug)]
pub struct HttpError {
    kind: ErrorKind,
    message: String,
    source: Option<BoxError>,
    field_errors: Option<ValidationFailure>,
}

macro_rules! taxonomy_constructors {
    ($($kind:ident => $plain:ident, $keyed:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($kind), "` with its default message.")]
            pub fn $plain(localizer: &Localizer) -> Self {
                Self::localized(ErrorKind::$kind, localizer, ErrorKind::$kind.default_key(), &[])
            }

            #[doc = concat!("`", stringify!($kind), "` with the message stored under `key`.")]
            pub fn $keyed(localizer: &Localizer, key: &str) -> Self {
                Self::localized(ErrorKind::$kind, localizer, key, &[])
            }
        )*
    };
}

impl HttpError {
    /// Creates an error with a message that is already display text.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            field_errors: None,
        }
    }

    /// Creates an error whose message is `key` resolved through `localizer`.
    pub fn localized(kind: ErrorKind, localizer: &Localizer, key: &str, placeholders: &[&str]) -> Self {
        Self::new(kind, localizer.text_with(key, placeholders))
    }

    taxonomy_constructors! {
        NotFound => not_found, not_found_with_key;
        Unauthorized => unauthorized, unauthorized_with_key;
        Forbidden => forbidden, forbidden_with_key;
        BadRequest => bad_request, bad_request_with_key;
        InternalServerError => internal_server_error, internal_server_error_with_key;
        Conflict => conflict, conflict_with_key;
        UnprocessableEntity => unprocessable_entity, unprocessable_entity_with_key;
    }

    /// 422 carrying every failing field.
    pub fn validation_errors(localizer: &Localizer, failure: ValidationFailure) -> Self {
        Self::validation_errors_with_key(localizer, keys::VALIDATION_FAILED, failure)
    }

    /// 422 carrying every failing field, with a custom message key.
    pub fn validation_errors_with_key(
        localizer: &Localizer,
        key: &str,
        failure: ValidationFailure,
    ) -> Self {
        let mut err = Self::localized(ErrorKind::ValidationErrors, localizer, key, &[]);
        err.field_errors = Some(failure);
        err
    }

    /// Attaches the underlying cause.
    pub fn caused_by(mut self, cause: impl Into<BoxError>) -> Self {
        self.source = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    /// The localized message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field_errors(&self) -> Option<&ValidationFailure> {
        self.field_errors.as_ref()
    }

    /// Cause text when a cause is attached, otherwise the localized message.
    pub fn error_text(&self) -> String {
        match &self.source {
            Some(cause) => cause.to_string(),
            None => self.message.clone(),
        }
    }

    /// Renders `{message, error, errors?}` with this error's status.
    pub fn render(&self) -> Response {
        let status = self.status();
        let error_text = self.error_text();

        if status.is_server_error() {
            error!(kind = %self.kind, status = status.as_u16(), cause = %error_text, "Request failed");
        } else {
            debug!(kind = %self.kind, status = status.as_u16(), cause = %error_text, "Request rejected");
        }

        let body = ErrorBody {
            message: Some(&self.message),
            error: error_text,
            errors: self.field_errors.as_ref(),
        };
        (status, Json(body)).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(cause) => write!(f, "{cause}"),
            None => f.write_str(&self.message),
        }
    }
}

impl StdError for HttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Any error that reaches the transport boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classified, localized error.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Anything else; rendered as a generic 500.
    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl AppError {
    /// Status code the renderer will use.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Http(err) => err.status(),
            Self::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Renders the error as a JSON response.
    ///
    /// Borrows `self`, so the same error always renders to the same bytes.
    pub fn render(&self) -> Response {
        match self {
            Self::Http(err) => err.render(),
            Self::Unclassified(err) => {
                let error_text = err.to_string();
                error!(error = ?err, "Unclassified error");

                let body = ErrorBody {
                    message: None,
                    error: error_text,
                    errors: None,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.render()
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.render()
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a ValidationFailure>,
}
