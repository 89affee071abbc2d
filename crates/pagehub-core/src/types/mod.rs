//! Core type definitions used across the PageHub workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::{PageMeta, PageRequest, PaginationQuery};
pub use sorting::SortDirection;
