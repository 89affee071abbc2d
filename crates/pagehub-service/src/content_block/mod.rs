//! Versioned page content.

pub mod dto;
pub mod service;

pub use service::ContentBlockService;
