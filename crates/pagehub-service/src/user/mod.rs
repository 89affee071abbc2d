//! User administration.

pub mod dto;
pub mod service;

pub use service::UserService;
