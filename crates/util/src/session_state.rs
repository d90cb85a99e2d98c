//! Session-scoped UI state: sidebar scroll offset and the breadcrumb trail.
//!
//! This is restorable-but-not-precious state, so it lives in the cache
//! directory rather than the config directory. The breadcrumb trail is a
//! capped, ordered list of visited pages; re-visiting a page moves its
//! record to the front instead of duplicating it.

use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use dirs_next::cache_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable controlling the session state file location.
pub const SESSION_STATE_PATH_ENV: &str = "LANDLORD_SESSION_STATE_PATH";

/// Default filename for the persisted session state.
pub const SESSION_STATE_FILE_NAME: &str = "session_state.json";

/// Maximum number of breadcrumb records retained.
pub const BREADCRUMB_LIMIT: usize = 5;

/// Errors surfaced by session store operations.
#[derive(Debug, Error)]
pub enum SessionStateError {
    /// I/O failure while reading or writing the session file.
    #[error("session state I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("session state serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One visited page in the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbRecord {
    /// Page title shown in the trail.
    pub title: String,
    /// Page url, used as the record's identity for deduplication.
    pub url: String,
    /// Last time the page was visited.
    #[serde(with = "ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    sidebar_scroll: u16,
    #[serde(default)]
    breadcrumbs: VecDeque<BreadcrumbRecord>,
}

impl SessionFile {
    fn push_crumb(&mut self, title: String, url: String, limit: usize) {
        if let Some(position) = self.breadcrumbs.iter().position(|record| record.url == url) {
            self.breadcrumbs.remove(position);
        }
        self.breadcrumbs.push_front(BreadcrumbRecord {
            title,
            url,
            updated_at: Utc::now(),
        });
        while self.breadcrumbs.len() > limit {
            self.breadcrumbs.pop_back();
        }
    }
}

/// Shared trait implemented by session state backends.
pub trait SessionStore: Send + Sync {
    /// Last persisted sidebar scroll offset, in rows.
    fn sidebar_scroll(&self) -> u16;

    /// Persist a new sidebar scroll offset.
    fn set_sidebar_scroll(&self, offset: u16) -> Result<(), SessionStateError>;

    /// Breadcrumb records, most recent first.
    fn breadcrumbs(&self) -> Vec<BreadcrumbRecord>;

    /// Record a page visit, deduplicating by url and enforcing the cap.
    fn push_breadcrumb(&self, title: &str, url: &str) -> Result<(), SessionStateError>;
}

/// JSON-backed session store persisted on disk.
pub struct JsonSessionStore {
    path: PathBuf,
    state: Mutex<SessionFile>,
}

impl JsonSessionStore {
    /// Create a store at the provided path (or the default path when omitted).
    pub fn new<P: Into<Option<PathBuf>>>(path: P) -> Result<Self, SessionStateError> {
        let resolved_path = match path.into() {
            Some(path) => path,
            None => default_session_state_path(),
        };
        let state = load_session_file(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            state: Mutex::new(state),
        })
    }

    /// Initialize a store using the default path resolution.
    pub fn with_defaults() -> Result<Self, SessionStateError> {
        Self::new(None::<PathBuf>)
    }

    /// Access the underlying file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_locked(&self, state: &SessionFile) -> Result<(), SessionStateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStore for JsonSessionStore {
    fn sidebar_scroll(&self) -> u16 {
        self.state.lock().expect("session state lock poisoned").sidebar_scroll
    }

    fn set_sidebar_scroll(&self, offset: u16) -> Result<(), SessionStateError> {
        let mut state = self.state.lock().expect("session state lock poisoned");
        state.sidebar_scroll = offset;
        self.save_locked(&state)
    }

    fn breadcrumbs(&self) -> Vec<BreadcrumbRecord> {
        let state = self.state.lock().expect("session state lock poisoned");
        state.breadcrumbs.iter().cloned().collect()
    }

    fn push_breadcrumb(&self, title: &str, url: &str) -> Result<(), SessionStateError> {
        let mut state = self.state.lock().expect("session state lock poisoned");
        state.push_crumb(title.to_string(), url.to_string(), BREADCRUMB_LIMIT);
        self.save_locked(&state)
    }
}

/// In-memory session store primarily used for unit testing and as a fallback
/// when the cache directory is unusable.
#[derive(Default)]
pub struct InMemorySessionStore {
    state: Mutex<SessionFile>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn sidebar_scroll(&self) -> u16 {
        self.state.lock().expect("session state lock poisoned").sidebar_scroll
    }

    fn set_sidebar_scroll(&self, offset: u16) -> Result<(), SessionStateError> {
        self.state.lock().expect("session state lock poisoned").sidebar_scroll = offset;
        Ok(())
    }

    fn breadcrumbs(&self) -> Vec<BreadcrumbRecord> {
        let state = self.state.lock().expect("session state lock poisoned");
        state.breadcrumbs.iter().cloned().collect()
    }

    fn push_breadcrumb(&self, title: &str, url: &str) -> Result<(), SessionStateError> {
        let mut state = self.state.lock().expect("session state lock poisoned");
        state.push_crumb(title.to_string(), url.to_string(), BREADCRUMB_LIMIT);
        Ok(())
    }
}

fn default_session_state_path() -> PathBuf {
    if let Ok(path) = env::var(SESSION_STATE_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("landlord")
        .join(SESSION_STATE_FILE_NAME)
}

fn load_session_file(path: &Path) -> Result<SessionFile, SessionStateError> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<SessionFile>(&content) {
            Ok(file) => Ok(file),
            Err(error) => {
                warn!("Failed to parse session state at {}: {}", path.display(), error);
                Ok(SessionFile::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(SessionFile::default()),
        Err(error) => Err(SessionStateError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn in_memory_round_trip() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.sidebar_scroll(), 0);
        store.set_sidebar_scroll(7).unwrap();
        assert_eq!(store.sidebar_scroll(), 7);
    }

    #[test]
    fn breadcrumbs_cap_at_limit() {
        let store = InMemorySessionStore::new();
        for index in 0..8 {
            store
                .push_breadcrumb(&format!("Page {index}"), &format!("/page-{index}"))
                .unwrap();
        }
        let crumbs = store.breadcrumbs();
        assert_eq!(crumbs.len(), BREADCRUMB_LIMIT);
        assert_eq!(crumbs[0].url, "/page-7");
        assert_eq!(crumbs[BREADCRUMB_LIMIT - 1].url, "/page-3");
    }

    #[test]
    fn revisits_move_to_front_without_duplicating() {
        let store = InMemorySessionStore::new();
        store.push_breadcrumb("Leases", "/leases").unwrap();
        store.push_breadcrumb("Tenants", "/tenants").unwrap();
        store.push_breadcrumb("Leases", "/leases").unwrap();

        let crumbs = store.breadcrumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].url, "/leases");
        assert_eq!(crumbs[1].url, "/tenants");
    }

    #[test]
    fn json_store_persists_across_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session_state.json");
        let store = JsonSessionStore::new(Some(path.clone())).unwrap();
        store.set_sidebar_scroll(3).unwrap();
        store.push_breadcrumb("Payments", "/payments").unwrap();

        drop(store);
        let reloaded = JsonSessionStore::new(Some(path)).unwrap();
        assert_eq!(reloaded.sidebar_scroll(), 3);
        assert_eq!(reloaded.breadcrumbs()[0].url, "/payments");
    }

    #[test]
    fn invalid_json_loads_as_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session_state.json");
        fs::write(&path, "{broken").unwrap();

        let store = JsonSessionStore::new(Some(path)).unwrap();
        assert_eq!(store.sidebar_scroll(), 0);
        assert!(store.breadcrumbs().is_empty());
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(SESSION_STATE_PATH_ENV, Some("~/custom/session.json"), || {
            let path = default_session_state_path();
            assert!(path.ends_with("custom/session.json"));
        });
    }
}
