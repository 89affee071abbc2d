//! Data transfer objects owned by the HTTP layer.

pub mod response;

pub use response::ApiResponse;
