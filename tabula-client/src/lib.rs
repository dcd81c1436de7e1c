//! # tabula-client
//!
//! A thin HTTP client for the [JSONPlaceholder](https://jsonplaceholder.typicode.com/)
//! demo API.
//!
//! ## Endpoints
//!
//! | Call | Request |
//! |------|---------|
//! | `fetch_collection(Resource::Posts)` | `GET {base}/posts` |
//! | `fetch_by_id(Resource::Posts, id)` | `GET {base}/posts/{id}` |
//! | `fetch_collection(Resource::Users)` | `GET {base}/users` |
//! | `fetch_by_id(Resource::Users, id)` | `GET {base}/users/{id}` |
//!
//! The collection endpoints return the whole collection; paging happens in
//! `tabula-core`.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tabula_client::{ApiClient, ClientConfig, RecordSource, Resource, SessionToken};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = Arc::new(SessionToken::new(None));
//!     let client = ApiClient::with_token_provider(ClientConfig::default(), token.clone())?;
//!
//!     let users = client.fetch_collection(Resource::Users).await?;
//!     for user in &users {
//!         println!("{} {}", user.id(), user.text("address.city"));
//!     }
//!
//!     // Later requests carry `Authorization: Bearer ...`
//!     token.set("session-token");
//!     let post = client.get_post(1).await?;
//!     println!("{}", post.title);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call makes a single attempt and returns [`ClientError`] on failure:
//!
//! - [`ClientError::NetworkError`]: transport failure or non-2xx status
//! - [`ClientError::Timeout`]: request timed out
//! - [`ClientError::NotFound`]: unknown record id
//! - [`ClientError::ParseError`]: unexpected response body

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{
    ACCEPT_VALUE, ApiClient, CONTENT_TYPE_VALUE, ClientConfig, DEFAULT_BASE_URL,
};
pub use error::{ClientError, Result};
pub use traits::{NoToken, RecordSource, SessionToken, TokenProvider};
pub use types::{Address, Company, Post, Record, Resource, User};
