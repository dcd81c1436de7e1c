//! Tabula Core Library
//!
//! Provides the platform-independent logic behind the Tabula browser:
//! - Client-side pagination of fully fetched collections
//! - List / detail view state machines with stale-result protection
//! - Overlay slots sharing a reference-counted background scroll lock
//! - Session store with typed slices (collection cache, auth token)
//! - Route table and notification queue
//!
//! Rendering lives in the front-end crate; this library only decides what
//! should be shown.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AuthSlice, CachePolicy, CollectionCache, CollectionService, ServiceContext};
pub use state::{
    DetailTicket, DetailView, ListView, LoadStatus, Overlay, RequestTicket, ScrollGuard,
    ScrollLock,
};
pub use traits::{InMemorySessionStore, RecordSource, SessionStore, TokenProvider};
