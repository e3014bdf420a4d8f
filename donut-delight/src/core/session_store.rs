//! SessionStore - session-scoped key/value storage
//!
//! Values are raw strings; encoding is the caller's concern (see
//! [`crate::core::persisted`]). Two implementations:
//! - `MemorySessionStore`: in-memory, for tests and embedding
//! - `FileSessionStore`: one JSON map per session directory, written through
//!   on every `set`, removed when the session ends

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key/value storage scoped to one session
pub trait SessionStore {
    /// Read a value by key; `None` if absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value under key
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: `{session_dir}/session.json`
#[derive(Debug)]
pub struct FileSessionStore {
    file_path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Open the session in `session_dir`, starting empty if there is none
    ///
    /// An unreadable session file is discarded rather than failing the page.
    pub fn open(session_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(session_dir)?;
        let file_path = session_dir.join(SESSION_FILE);

        let values = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %file_path.display(), error = %e, "Discarding corrupt session file");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Ok(Self { file_path, values })
    }

    /// End the session in `session_dir`; returns whether one existed
    pub fn end_session(session_dir: &Path) -> Result<bool, StoreError> {
        let file_path = session_dir.join(SESSION_FILE);
        if !file_path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&file_path)?;
        tracing::info!(path = %file_path.display(), "Session ended");
        Ok(true)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()?;
        tracing::debug!(key = %key, "Session value written");
        Ok(())
    }
}
