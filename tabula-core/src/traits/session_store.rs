//! Session store abstract Trait

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::error::{CoreError, CoreResult};

/// Session-scoped key/value store
///
/// Values live only as long as the process. Keys are dotted slice names
/// such as `posts.items` or `auth.token`; typed access goes through the
/// slices in [`crate::services`].
///
/// Reads are synchronous: the token slice is consulted while building
/// each HTTP request.
pub trait SessionStore: Send + Sync {
    /// Read a value
    ///
    /// # Arguments
    /// * `key` - Slice key
    fn get(&self, key: &str) -> CoreResult<Option<Value>>;

    /// Write a value, replacing any previous one
    ///
    /// # Arguments
    /// * `key` - Slice key
    /// * `value` - JSON value
    fn set(&self, key: &str, value: Value) -> CoreResult<()>;

    /// Remove a value
    fn remove(&self, key: &str) -> CoreResult<()>;

    /// List stored keys
    fn keys(&self) -> CoreResult<Vec<String>>;

    /// Drop everything
    fn clear(&self) -> CoreResult<()>;
}

/// In-memory session store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemorySessionStore {
    /// Create a new memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E>(_: E) -> CoreError {
    CoreError::StorageError("session store lock poisoned".to_string())
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> CoreResult<Option<Value>> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> CoreResult<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }

    fn keys(&self) -> CoreResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .map_err(poisoned)?
            .keys()
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn clear(&self) -> CoreResult<()> {
        self.entries.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_get_remove() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("a").ok().flatten(), None);

        store.set("a", json!({"x": 1})).ok();
        assert_eq!(store.get("a").ok().flatten(), Some(json!({"x": 1})));

        store.remove("a").ok();
        assert_eq!(store.get("a").ok().flatten(), None);
    }

    #[test]
    fn clones_share_entries() {
        let store = InMemorySessionStore::new();
        let other = store.clone();
        store.set("auth.token", json!("t")).ok();
        assert_eq!(other.keys().unwrap_or_default(), vec!["auth.token".to_string()]);

        other.clear().ok();
        assert!(store.keys().unwrap_or_default().is_empty());
    }
}
