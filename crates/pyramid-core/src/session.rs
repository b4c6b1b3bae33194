//! Session store
//!
//! Each authoring session owns one [`PyramidManager`]. The store hands out
//! shared handles guarded by a mutex, so concurrent requests against the
//! same session are serialized while different sessions proceed
//! independently.

use crate::manager::PyramidManager;
use dashmap::DashMap;
use parking_lot::Mutex;
use pyramid_model::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared, single-writer handle to a session's manager
pub type SharedManager = Arc<Mutex<PyramidManager>>;

/// Opaque session key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an externally chosen key
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random key
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Key as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Keyed storage of per-session managers
pub trait SessionStore: Send + Sync {
    /// Existing manager for `id`, or a new empty one registered under it
    fn get_or_create(&self, id: &SessionId) -> SharedManager;

    /// Existing manager for `id`
    fn get(&self, id: &SessionId) -> Option<SharedManager>;

    /// Register `manager` under `id`, replacing any previous session
    fn insert(&self, id: SessionId, manager: PyramidManager) -> SharedManager;

    /// Drop a session; `false` if it did not exist
    fn remove(&self, id: &SessionId) -> bool;

    /// Keys of all live sessions, sorted
    fn session_ids(&self) -> Vec<SessionId>;

    /// Number of live sessions
    fn len(&self) -> usize;

    /// Whether no session is live
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory session store
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, SharedManager>,
    template: Metadata,
}

impl InMemorySessionStore {
    /// Create store whose new sessions start as "Untitled strategy"
    #[must_use]
    pub fn new() -> Self {
        Self::with_template(Metadata::new("Untitled strategy", ""))
    }

    /// Create store whose new sessions copy `template` metadata
    #[must_use]
    pub fn with_template(template: Metadata) -> Self {
        Self {
            sessions: DashMap::new(),
            template,
        }
    }
}

/// Copy of `template` with creation stamps set to now
fn fresh_metadata(template: &Metadata) -> Metadata {
    Metadata {
        created_by: template.created_by.clone(),
        description: template.description.clone(),
        version: template.version.clone(),
        ..Metadata::new(template.project_name.clone(), template.organization.clone())
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&self, id: &SessionId) -> SharedManager {
        let entry = self.sessions.entry(id.clone()).or_insert_with(|| {
            tracing::info!(session = %id, "created session");
            Arc::new(Mutex::new(PyramidManager::new(fresh_metadata(&self.template))))
        });
        Arc::clone(entry.value())
    }

    fn get(&self, id: &SessionId) -> Option<SharedManager> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    fn insert(&self, id: SessionId, manager: PyramidManager) -> SharedManager {
        let shared = Arc::new(Mutex::new(manager));
        tracing::debug!(session = %id, "stored session");
        self.sessions.insert(id, Arc::clone(&shared));
        shared
    }

    fn remove(&self, id: &SessionId) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::info!(session = %id, "removed session");
        }
        removed
    }

    fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        ids
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn get_or_create_returns_the_same_manager() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new("workshop-1");

        let first = store.get_or_create(&id);
        first.lock().add_value("Integrity", "");
        let second = store.get_or_create(&id);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.lock().pyramid().values.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_sessions_copy_template() {
        let store = InMemorySessionStore::with_template(Metadata::new("FY26", "Acme"));
        let shared = store.get_or_create(&SessionId::generate());
        let manager = shared.lock();
        assert_eq!(manager.metadata().project_name, "FY26");
        assert_eq!(manager.metadata().organization, "Acme");
    }

    #[test]
    fn remove_and_list() {
        let store = InMemorySessionStore::new();
        store.get_or_create(&"b".into());
        store.get_or_create(&"a".into());

        assert_eq!(store.session_ids(), vec![SessionId::new("a"), SessionId::new("b")]);
        assert!(store.remove(&"a".into()));
        assert!(!store.remove(&"a".into()));
        assert!(store.get(&"a".into()).is_none());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn concurrent_writers_are_serialized() {
        let store = Arc::new(InMemorySessionStore::new());
        let id = SessionId::new("shared");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                let id = id.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        store
                            .get_or_create(&id)
                            .lock()
                            .add_value(format!("value-{i}-{j}"), "");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let shared = store.get(&id).unwrap();
        assert_eq!(shared.lock().pyramid().values.len(), 200);
    }
}
