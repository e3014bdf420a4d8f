//! Data models

pub mod item;

pub use item::Item;
