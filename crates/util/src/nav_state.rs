//! Persistence for the sidebar's expanded navigation sections.
//!
//! A tiny JSON-backed store holding the ordered list of section slugs the
//! user has expanded. The file lives in the standard configuration directory
//! (`~/.config/landlord/nav_state.json` on most platforms) and is safe to
//! read/write from multiple threads thanks to the internal `Mutex`. Writes
//! are synchronous: the file on disk is the source of truth after a crash.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the store file path.
pub const NAV_STATE_PATH_ENV: &str = "LANDLORD_NAV_STATE_PATH";

/// Default filename for the JSON payload.
pub const NAV_STATE_FILE_NAME: &str = "nav_state.json";

/// Error surfaced when reading or writing the store fails.
#[derive(Debug, Error)]
pub enum NavStateError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("nav state I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("nav state serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted payload: expanded section slugs in most-recent-toggle order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NavStatePayload {
    pub open_sections: Vec<String>,
}

/// Thread-safe store backed by a JSON file.
#[derive(Debug, Default)]
pub struct NavStateStore {
    path: PathBuf,
    payload: Mutex<NavStatePayload>,
    persist_to_disk: bool,
}

impl NavStateStore {
    /// Create a store rooted at the provided path. When `path` is `None`,
    /// the env override or default config directory path is used. A
    /// malformed file on disk loads as the empty default rather than
    /// erroring.
    pub fn new<P: Into<Option<PathBuf>>>(path: P) -> Result<Self, NavStateError> {
        let resolved_path = match path.into() {
            Some(path) => path,
            None => default_nav_state_path(),
        };
        let payload = load_payload(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Initialize a store using the default path resolution.
    pub fn with_defaults() -> Result<Self, NavStateError> {
        Self::new(None::<PathBuf>)
    }

    /// Build an in-memory store used as a fallback when the config directory
    /// cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(NavStatePayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted list of expanded section slugs.
    pub fn open_sections(&self) -> Vec<String> {
        self.payload.lock().expect("nav state lock poisoned").open_sections.clone()
    }

    /// Replaces the persisted list, writing through to disk before returning.
    pub fn set_open_sections(&self, open_sections: Vec<String>) -> Result<(), NavStateError> {
        let mut payload = self.payload.lock().expect("nav state lock poisoned");
        payload.open_sections = open_sections;
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn save_locked(&self, payload: &NavStatePayload) -> Result<(), NavStateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_nav_state_path() -> PathBuf {
    if let Ok(path) = env::var(NAV_STATE_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("landlord")
        .join(NAV_STATE_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<NavStatePayload, NavStateError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse nav state file; using defaults"
                );
                Ok(NavStatePayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(NavStatePayload::default()),
        Err(error) => Err(NavStateError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = NavStateStore::new(Some(dir.path().join("nav_state.json"))).unwrap();
        assert!(store.open_sections().is_empty());
    }

    #[test]
    fn open_sections_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nav_state.json");
        let store = NavStateStore::new(Some(path.clone())).unwrap();
        store
            .set_open_sections(vec!["leasing".into(), "finance".into()])
            .unwrap();

        drop(store);
        let reloaded = NavStateStore::new(Some(path)).unwrap();
        assert_eq!(reloaded.open_sections(), vec!["leasing".to_string(), "finance".to_string()]);
    }

    #[test]
    fn invalid_json_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nav_state.json");
        fs::write(&path, "not json").unwrap();

        let store = NavStateStore::new(Some(path)).unwrap();
        assert!(store.open_sections().is_empty());
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let store = NavStateStore::ephemeral();
        store.set_open_sections(vec!["portfolio".into()]).unwrap();
        assert_eq!(store.open_sections(), vec!["portfolio".to_string()]);
        assert_eq!(store.path(), Path::new(""));
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(NAV_STATE_PATH_ENV, Some("~/custom/nav_state.json"), || {
            let path = default_nav_state_path();
            assert!(path.ends_with("custom/nav_state.json"));
        });
    }
}
