//! Core module for Donut Delight
//!
//! - SessionStore: session-scoped key/value storage
//! - persisted: id-list codec for the stored order and selection
//! - OrderManager: display order reconciliation and chomp selection
//! - theme: Blue/Pink theme persisted per session
//! - logger: tracing setup

pub mod logger;
pub mod order_manager;
pub mod persisted;
pub mod session_store;
pub mod theme;

pub use order_manager::{ManagerError, ManagerResult, OrderManager};
pub use persisted::{ORDER_KEY, PersistedStateError, SELECTION_KEY};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError};
pub use theme::{THEME_KEY, Theme};
