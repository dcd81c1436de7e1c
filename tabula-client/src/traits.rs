use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Record, Resource};

/// Source of upstream records.
///
/// [`ApiClient`](crate::ApiClient) is the production implementation; the core
/// crate depends only on this trait so its services can be tested against an
/// in-memory source.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the whole collection. The upstream API has no server-side paging.
    async fn fetch_collection(&self, resource: Resource) -> Result<Vec<Record>>;

    /// Fetch a single record by id.
    ///
    /// # Errors
    /// [`ClientError::NotFound`](crate::ClientError::NotFound) when the id does
    /// not exist upstream.
    async fn fetch_by_id(&self, resource: Resource, id: u64) -> Result<Record>;
}

/// Supplies the bearer token attached to outgoing requests.
///
/// Consulted on every request, so a token set or cleared mid-session takes
/// effect on the next fetch.
pub trait TokenProvider: Send + Sync {
    /// Current token, if any.
    fn token(&self) -> Option<String>;
}

/// No token is ever attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Session-scoped token held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct SessionToken {
    token: RwLock<Option<String>>,
}

impl SessionToken {
    /// Create a holder, optionally seeded with a token.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token.filter(|t| !t.trim().is_empty())),
        }
    }

    /// Replace the token. Blank strings clear it.
    pub fn set(&self, token: impl Into<String>) {
        let token = token.into();
        if let Ok(mut guard) = self.token.write() {
            *guard = if token.trim().is_empty() { None } else { Some(token) };
        }
    }

    /// Drop the token.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

impl TokenProvider for SessionToken {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_token_set_and_clear() {
        let holder = SessionToken::new(None);
        assert_eq!(holder.token(), None);

        holder.set("abc");
        assert_eq!(holder.token().as_deref(), Some("abc"));

        holder.clear();
        assert_eq!(holder.token(), None);
    }

    #[test]
    fn blank_token_is_ignored() {
        let holder = SessionToken::new(Some("   ".into()));
        assert_eq!(holder.token(), None);

        holder.set("t");
        holder.set("");
        assert_eq!(holder.token(), None);
    }

    #[test]
    fn no_token_never_yields() {
        assert_eq!(NoToken.token(), None);
    }
}
