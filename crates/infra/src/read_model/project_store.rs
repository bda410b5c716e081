use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use xerlens_core::{ProjectKey, SessionId};

/// Session-isolated storage for analyzed projects.
///
/// Each session sees only its own projects. Storing under an existing key
/// replaces the earlier analysis and hands it back.
pub trait ProjectStore<V>: Send + Sync {
    fn get(&self, session: SessionId, key: &ProjectKey) -> Option<V>;

    /// Store `value`, returning the analysis it replaced.
    fn upsert(&self, session: SessionId, key: ProjectKey, value: V) -> Option<V>;

    /// All values of a session, ordered by project key.
    fn list(&self, session: SessionId) -> Vec<V>;

    /// Project keys of a session, ascending.
    fn keys(&self, session: SessionId) -> Vec<ProjectKey>;

    /// Drop every project of a session; returns how many were dropped.
    fn clear_session(&self, session: SessionId) -> usize;
}

/// In-memory store: one key-ordered map per session.
///
/// A poisoned lock is recovered. Every mutation is a single `insert` or
/// `remove`, so the maps are consistent even after a panicking writer.
#[derive(Debug)]
pub struct InMemoryProjectStore<V> {
    sessions: RwLock<HashMap<SessionId, BTreeMap<ProjectKey, V>>>,
}

impl<V> InMemoryProjectStore<V> {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of sessions holding at least one project.
    pub fn session_count(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<SessionId, BTreeMap<ProjectKey, V>>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, BTreeMap<ProjectKey, V>>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V> Default for InMemoryProjectStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ProjectStore<V> for InMemoryProjectStore<V>
where
    V: Clone + Send + Sync,
{
    fn get(&self, session: SessionId, key: &ProjectKey) -> Option<V> {
        self.read().get(&session)?.get(key).cloned()
    }

    fn upsert(&self, session: SessionId, key: ProjectKey, value: V) -> Option<V> {
        self.write().entry(session).or_default().insert(key, value)
    }

    fn list(&self, session: SessionId) -> Vec<V> {
        self.read()
            .get(&session)
            .map(|projects| projects.values().cloned().collect())
            .unwrap_or_default()
    }

    fn keys(&self, session: SessionId) -> Vec<ProjectKey> {
        self.read()
            .get(&session)
            .map(|projects| projects.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn clear_session(&self, session: SessionId) -> usize {
        self.write().remove(&session).map_or(0, |projects| projects.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn key(s: &str) -> ProjectKey {
        ProjectKey::new(s).unwrap()
    }

    #[test]
    fn sessions_are_isolated() {
        let store: InMemoryProjectStore<u32> = InMemoryProjectStore::new();
        let a = SessionId::new();
        let b = SessionId::new();

        store.upsert(a, key("P1"), 1);
        store.upsert(b, key("P1"), 2);

        assert_eq!(store.get(a, &key("P1")), Some(1));
        assert_eq!(store.get(b, &key("P1")), Some(2));
        assert_eq!(store.get(a, &key("P2")), None);
        assert_eq!(store.session_count(), 2);
    }

    #[test]
    fn upsert_hands_back_the_replaced_value() {
        let store: InMemoryProjectStore<&'static str> = InMemoryProjectStore::new();
        let s = SessionId::new();

        assert_eq!(store.upsert(s, key("B"), "b1"), None);
        assert_eq!(store.upsert(s, key("A"), "a"), None);
        assert_eq!(store.upsert(s, key("B"), "b2"), Some("b1"));

        assert_eq!(store.list(s), vec!["a", "b2"]);
        assert_eq!(store.keys(s), vec![key("A"), key("B")]);
    }

    #[test]
    fn clear_session_leaves_other_sessions() {
        let store: InMemoryProjectStore<u8> = InMemoryProjectStore::new();
        let a = SessionId::new();
        let b = SessionId::new();
        store.upsert(a, key("X"), 1);
        store.upsert(a, key("Y"), 1);
        store.upsert(b, key("X"), 2);

        assert_eq!(store.clear_session(a), 2);
        assert_eq!(store.clear_session(a), 0);

        assert!(store.list(a).is_empty());
        assert_eq!(store.list(b), vec![2]);
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn poisoned_lock_still_stores_and_reads() {
        let store: Arc<InMemoryProjectStore<u8>> = Arc::new(InMemoryProjectStore::new());
        let s = SessionId::new();
        store.upsert(s, key("before"), 1);

        let poisoner = Arc::clone(&store);
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.sessions.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(store.sessions.is_poisoned());

        assert_eq!(store.upsert(s, key("after"), 2), None);
        assert_eq!(store.get(s, &key("after")), Some(2));
        assert_eq!(store.list(s), vec![2, 1]);
    }
}
