//! Donut Delight - terminal front-end
//!
//! Lists donuts from a static JSON catalog, lets the user chomp them, keeps
//! the shuffled order and chomps stable for the rest of the session, and
//! totals the chomped prices.
//!
//! Each CLI invocation is one page load. The session lives in a directory
//! until `session-end` removes it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod pages;

// Re-export client and shared crates
pub use donut_client;
pub use shared;

pub use cli::{CommandLine, Commands};
pub use config::AppConfig;
pub use crate::core::{FileSessionStore, MemorySessionStore, OrderManager, SessionStore, Theme};
