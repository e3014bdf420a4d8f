//! Theme command

use crate::core::theme::{load_theme, save_theme};
use crate::core::{SessionStore, Theme};

/// Show the current theme, or switch to `theme`
pub fn run<S: SessionStore>(store: &mut S, theme: Option<Theme>) -> anyhow::Result<String> {
    match theme {
        Some(theme) => {
            save_theme(store, theme)?;
            tracing::info!(theme = %theme, "Theme switched");
            Ok(format!("Theme switched to {theme}."))
        }
        None => Ok(format!("Current theme: {}.", load_theme(store))),
    }
}
