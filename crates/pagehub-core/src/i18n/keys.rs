//! Message keys used by the catalog.
//!
//! Templates live in the locale definition file; these constants are the
//! stable identifiers code refers to.

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";

// Defaults of the error taxonomy.
pub const NOT_FOUND: &str = "not_found";
pub const UNAUTHORIZED: &str = "unauthorized";
pub const FORBIDDEN: &str = "forbidden";
pub const BAD_REQUEST: &str = "bad_request";
pub const INTERNAL_SERVER_ERROR: &str = "internal_server_error";
pub const CONFLICT: &str = "conflict";
pub const UNPROCESSABLE_ENTITY: &str = "unprocessable_entity";
pub const VALIDATION_FAILED: &str = "validation_failed";

// Generic resource outcomes; `{0}` is the resource name key.
pub const RESOURCE_CREATED: &str = "resource_created";
pub const RESOURCE_UPDATED: &str = "resource_updated";
pub const RESOURCE_DELETED: &str = "resource_deleted";
pub const RESOURCE_FETCHED: &str = "resource_fetched";
pub const ERR_RESOURCE_NOT_FOUND: &str = "err_resource_not_found";
pub const ERR_RESOURCE_EXISTS: &str = "err_resource_exists";
pub const ERR_UNMATCHED_ID: &str = "err_unmatched_id";

// Resource names.
pub const USER_RESOURCE: &str = "user_resource";
pub const CONTENT_BLOCK_RESOURCE: &str = "content_block_resource";

// Authentication.
pub const USER_REGISTERED: &str = "user_registered";
pub const LOGIN_SUCCESSFUL: &str = "login_successful";
pub const EMAIL_VERIFIED: &str = "email_verified";
pub const ERR_INVALID_CREDENTIALS: &str = "error_invalid_credentials";
pub const ERR_TOKEN_GENERATION: &str = "error_token_generation";
pub const ERR_EMAIL_ALREADY_USED: &str = "error_email_already_used";
pub const ERR_PASSWORD_HASHING: &str = "error_password_hashing";
pub const ERR_USER_CREATION: &str = "error_user_creation";
pub const ERR_INVALID_TOKEN: &str = "error_invalid_token";
pub const ERR_INVALID_USER: &str = "error_invalid_user";
pub const ERR_USER_UPDATE: &str = "error_user_update";
