//! 会话存储的类型化切片
//!
//! | Slice | Key | Value |
//! |-------|-----|-------|
//! | [`CollectionCache`] | `{resource}.items` | JSON array of records |
//! | [`AuthSlice`] | `auth.token` | JSON string |

use std::sync::Arc;

use serde_json::Value;
use tabula_client::{Record, Resource, TokenProvider};

use crate::error::CoreResult;
use crate::traits::SessionStore;

const AUTH_TOKEN_KEY: &str = "auth.token";

/// Fetched collections kept for the rest of the session.
#[derive(Clone)]
pub struct CollectionCache {
    store: Arc<dyn SessionStore>,
}

impl CollectionCache {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    fn key(resource: Resource) -> String {
        format!("{resource}.items")
    }

    /// 读取缓存的集合
    pub fn get(&self, resource: Resource) -> CoreResult<Option<Vec<Record>>> {
        match self.store.get(&Self::key(resource))? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// 写入集合（整体替换）
    pub fn put(&self, resource: Resource, records: &[Record]) -> CoreResult<()> {
        self.store
            .set(&Self::key(resource), serde_json::to_value(records)?)
    }

    /// Number of cached records; 0 when nothing is cached.
    pub fn len(&self, resource: Resource) -> usize {
        match self.store.get(&Self::key(resource)) {
            Ok(Some(Value::Array(items))) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self, resource: Resource) -> bool {
        self.len(resource) == 0
    }
}

/// Bearer token for the current session.
#[derive(Clone)]
pub struct AuthSlice {
    store: Arc<dyn SessionStore>,
}

impl AuthSlice {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn get(&self) -> CoreResult<Option<String>> {
        Ok(self
            .store
            .get(AUTH_TOKEN_KEY)?
            .and_then(|v| v.as_str().map(str::to_string)))
    }

    /// 设置令牌；空白字符串等同于清除
    pub fn set(&self, token: &str) -> CoreResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return self.clear();
        }
        log::debug!("Session token updated");
        self.store
            .set(AUTH_TOKEN_KEY, Value::String(token.to_string()))
    }

    pub fn clear(&self) -> CoreResult<()> {
        self.store.remove(AUTH_TOKEN_KEY)
    }
}

impl TokenProvider for AuthSlice {
    fn token(&self) -> Option<String> {
        match self.get() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Failed to read session token: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::records;
    use crate::traits::InMemorySessionStore;

    fn store() -> Arc<dyn SessionStore> {
        Arc::new(InMemorySessionStore::new())
    }

    #[test]
    fn cache_round_trips_records() {
        let store = store();
        let cache = CollectionCache::new(Arc::clone(&store));
        assert!(cache.get(Resource::Posts).unwrap_or_default().is_none());

        cache.put(Resource::Posts, &records(4)).ok();
        let cached = cache.get(Resource::Posts).ok().flatten().unwrap_or_default();
        assert_eq!(cached, records(4));
        assert_eq!(cache.len(Resource::Posts), 4);
        assert!(cache.is_empty(Resource::Users));
        assert!(store.get("posts.items").ok().flatten().is_some());
    }

    #[test]
    fn auth_token_set_and_clear() {
        let auth = AuthSlice::new(store());
        assert_eq!(auth.token(), None);

        auth.set("  abc  ").ok();
        assert_eq!(auth.token().as_deref(), Some("abc"));

        auth.set("   ").ok();
        assert_eq!(auth.token(), None);
    }
}
