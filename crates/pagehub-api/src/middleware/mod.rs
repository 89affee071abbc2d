//! Tower middleware applied around the router.

pub mod cors;
pub mod logging;
