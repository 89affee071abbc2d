//! Request validation on top of the `validator` derive.
//!
//! Structs declare their constraints with `#[derive(Validate)]`; this module
//! turns the nested [`validator::ValidationErrors`] tree into a flat
//! [`ValidationFailure`] and wraps it in the 422 taxonomy error.

pub mod rules;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::HttpError;
use crate::i18n::Localizer;

const REQUIRED: &str = "required";

/// Field path -> reason, one entry per failing field.
///
/// Ordered so that the rendered `errors` object is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationFailure(BTreeMap<String, String>);

impl ValidationFailure {
    /// Records that `field` failed the rule named `code`.
    ///
    /// A `required` failure is never replaced by another rule; any other
    /// rule keeps the first one recorded.
    pub fn insert(&mut self, field: impl Into<String>, code: &str) {
        let reason = describe(code);
        let field = field.into();
        match self.0.get(&field) {
            Some(existing) if code != REQUIRED || *existing == reason => {}
            _ => {
                self.0.insert(field, reason);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reason) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {reason}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<&ValidationErrors> for ValidationFailure {
    fn from(errors: &ValidationErrors) -> Self {
        collect_failures(errors)
    }
}

fn describe(code: &str) -> String {
    format!("validation failed on tag '{code}'")
}

/// Validates `target`, returning the 422 error with every failing field.
pub fn validate_struct<T: Validate>(localizer: &Localizer, target: &T) -> Result<(), HttpError> {
    target
        .validate()
        .map_err(|errors| HttpError::validation_errors(localizer, collect_failures(&errors)))
}

/// Flattens a validator error tree.
///
/// Nested structs appear as `parent.child`, list items as `field[i].child`.
pub fn collect_failures(errors: &ValidationErrors) -> ValidationFailure {
    let mut failure = ValidationFailure::default();
    flatten_into(&mut failure, None, errors);
    failure
}

fn flatten_into(failure: &mut ValidationFailure, prefix: Option<&str>, errors: &ValidationErrors) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    failure.insert(path.clone(), &error.code);
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(failure, Some(&path), nested),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{path}[{index}]");
                    flatten_into(failure, Some(&item_path), nested);
                }
            }
        }
    }
}
