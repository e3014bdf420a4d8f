//! Theme selection
//!
//! The active theme lives in the session store next to the list state.

use super::session_store::{SessionStore, StoreError};
use std::fmt;

/// Session key of the active theme
pub const THEME_KEY: &str = "vite-ui-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Blue,
    Pink,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Pink => "pink",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "blue" => Some(Theme::Blue),
            "pink" => Some(Theme::Pink),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored theme, or the default when absent or unrecognized
pub fn load_theme(store: &impl SessionStore) -> Theme {
    match store.get(THEME_KEY) {
        Some(value) => Theme::parse(&value).unwrap_or_else(|| {
            tracing::warn!(value = %value, "Unknown stored theme, using default");
            Theme::default()
        }),
        None => Theme::default(),
    }
}

pub fn save_theme(store: &mut impl SessionStore, theme: Theme) -> Result<(), StoreError> {
    store.set(THEME_KEY, theme.as_str())
}
