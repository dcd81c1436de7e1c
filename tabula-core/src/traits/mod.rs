//! Storage layer abstraction trait definition

mod session_store;

pub use session_store::{InMemorySessionStore, SessionStore};

// Re-export the data source trait from the client library
pub use tabula_client::{RecordSource, TokenProvider};
