//! Custom rules referenced from `#[validate(custom(function = ...))]`.
//!
//! Each rule reports a fixed code, which ends up in the rendered reason
//! (`validation failed on tag '<code>'`).

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

static TIME_OF_DAY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").ok());

static E164: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").ok());

/// Roles a user may be created with.
pub const USER_ROLES: &[&str] = &["admin", "user", "moderator"];

/// Accepted list sort directions.
pub const SORT_ORDERS: &[&str] = &["asc", "desc"];

/// Non-blank text.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Strict `HH:MM:SS`.
pub fn time_format(value: &str) -> Result<(), ValidationError> {
    if is_match(&TIME_OF_DAY, value) {
        Ok(())
    } else {
        Err(ValidationError::new("timeformat"))
    }
}

/// International phone number, e.g. `+14155552671`.
pub fn e164(value: &str) -> Result<(), ValidationError> {
    if is_match(&E164, value) {
        Ok(())
    } else {
        Err(ValidationError::new("e164"))
    }
}

/// Textual UUID, as used in path parameters.
pub fn uuid_text(value: &str) -> Result<(), ValidationError> {
    uuid::Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("uuid"))
}

pub fn one_of_user_role(value: &str) -> Result<(), ValidationError> {
    one_of(value, USER_ROLES)
}

pub fn one_of_sort_order(value: &str) -> Result<(), ValidationError> {
    one_of(value, SORT_ORDERS)
}

fn is_match(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    Option::as_ref(pattern).is_some_and(|re| re.is_match(value))
}

fn one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("oneof"))
    }
}
