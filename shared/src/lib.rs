//! Shared types for Donut Delight
//!
//! Catalog models and money helpers used by both the client crate and the
//! front-end crate.

pub mod models;
pub mod money;

// Re-exports
pub use models::Item;
