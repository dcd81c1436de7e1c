//! Demo API client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http_client::{HttpUtils, STATUS_NOT_FOUND};
use crate::traits::{NoToken, RecordSource, TokenProvider};
use crate::types::{Post, Record, Resource, User};

/// Public demo API every request targets unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

/// `Accept` header sent on every request.
pub const ACCEPT_VALUE: &str = "application/json,text/plain,octet-stream,*/*";
/// `Content-Type` header sent on every request.
pub const CONTENT_TYPE_VALUE: &str = "application/json";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client construction options.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root. A trailing `/` is added when missing.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for the demo API.
///
/// Holds one fixed base address. Each request gets the fixed
/// `Accept`/`Content-Type` pair and, when the [`TokenProvider`] yields one, a
/// bearer token.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Create a client that never sends a token.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_token_provider(config, Arc::new(NoToken))
    }

    /// Create a client that asks `tokens` for a bearer token on every request.
    pub fn with_token_provider(
        config: ClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::NetworkError {
                status: None,
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    /// Base address all requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve the URL for a collection or a single record.
    pub fn endpoint(&self, resource: Resource, id: Option<u64>) -> Result<Url> {
        let path = match id {
            Some(id) => format!("{}/{id}", resource.path()),
            None => resource.path().to_string(),
        };
        self.base_url
            .join(&path)
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                detail: e.to_string(),
            })
    }

    /// Build a GET request with the standard headers and, if present, the
    /// bearer token.
    pub(crate) fn get_request(&self, url: Url) -> RequestBuilder {
        let builder = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_VALUE)
            .header(CONTENT_TYPE, CONTENT_TYPE_VALUE);

        match self.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `GET /posts`
    pub async fn get_posts(&self) -> Result<Vec<Record>> {
        self.fetch_collection(Resource::Posts).await
    }

    /// `GET /posts/{id}`, decoded.
    pub async fn get_post(&self, id: u64) -> Result<Post> {
        let record = self.fetch_by_id(Resource::Posts, id).await?;
        decode(&record)
    }

    /// `GET /users`
    pub async fn get_users(&self) -> Result<Vec<Record>> {
        self.fetch_collection(Resource::Users).await
    }

    /// `GET /users/{id}`, decoded.
    pub async fn get_user(&self, id: u64) -> Result<User> {
        let record = self.fetch_by_id(Resource::Users, id).await?;
        decode(&record)
    }
}

#[async_trait]
impl RecordSource for ApiClient {
    async fn fetch_collection(&self, resource: Resource) -> Result<Vec<Record>> {
        let url = self.endpoint(resource, None)?;
        let url_text = url.to_string();
        let (status, body) =
            HttpUtils::execute_request(self.get_request(url), "GET", &url_text).await?;

        if status == STATUS_NOT_FOUND {
            return Err(ClientError::NetworkError {
                status: Some(status),
                detail: format!("HTTP {status}: collection {resource} is unavailable"),
            });
        }

        let records: Vec<Record> = HttpUtils::parse_json(&body)?;
        log::debug!("Fetched {} {resource}", records.len());
        Ok(records)
    }

    async fn fetch_by_id(&self, resource: Resource, id: u64) -> Result<Record> {
        let url = self.endpoint(resource, Some(id))?;
        let url_text = url.to_string();
        let (status, body) =
            HttpUtils::execute_request(self.get_request(url), "GET", &url_text).await?;

        if status == STATUS_NOT_FOUND {
            return Err(ClientError::NotFound { resource, id });
        }

        record_from_body(&body, resource, id)
    }
}

/// Interpret a single-record body. The demo API answers unknown ids with `{}`
/// on some deployments instead of a 404.
fn record_from_body(body: &str, resource: Resource, id: u64) -> Result<Record> {
    let value: Value = HttpUtils::parse_json(body)?;
    if value.as_object().is_some_and(serde_json::Map::is_empty) {
        return Err(ClientError::NotFound { resource, id });
    }
    serde_json::from_value(value).map_err(|e| ClientError::ParseError {
        detail: e.to_string(),
    })
}

fn decode<T: serde::de::DeserializeOwned>(record: &Record) -> Result<T> {
    record.decode().map_err(|e| ClientError::ParseError {
        detail: e.to_string(),
    })
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl {
            url: raw.to_string(),
            detail: "URL cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SessionToken;
    use reqwest::header::AUTHORIZATION;

    fn client_with(tokens: Arc<dyn TokenProvider>) -> ApiClient {
        ApiClient::with_token_provider(ClientConfig::default(), tokens)
            .unwrap_or_else(|e| panic!("client: {e}"))
    }

    #[test]
    fn endpoints_resolve_against_base() {
        let client = client_with(Arc::new(NoToken));
        let posts = client.endpoint(Resource::Posts, None).map(|u| u.to_string());
        let user = client.endpoint(Resource::Users, Some(3)).map(|u| u.to_string());
        assert_eq!(posts.ok().as_deref(), Some("https://jsonplaceholder.typicode.com/posts"));
        assert_eq!(user.ok().as_deref(), Some("https://jsonplaceholder.typicode.com/users/3"));
    }

    #[test]
    fn base_without_trailing_slash_keeps_path_prefix() {
        let config = ClientConfig {
            base_url: "http://localhost:3000/api".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(config).unwrap_or_else(|e| panic!("{e}"));
        let url = client.endpoint(Resource::Posts, Some(1)).map(|u| u.to_string());
        assert_eq!(url.ok().as_deref(), Some("http://localhost:3000/api/posts/1"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            ApiClient::new(config),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn standard_headers_on_every_request() {
        let client = client_with(Arc::new(NoToken));
        let url = client
            .endpoint(Resource::Posts, None)
            .unwrap_or_else(|e| panic!("{e}"));
        let request = client
            .get_request(url)
            .build()
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(request.headers()[ACCEPT], ACCEPT_VALUE);
        assert_eq!(request.headers()[CONTENT_TYPE], CONTENT_TYPE_VALUE);
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn bearer_token_follows_session_state() {
        let tokens = Arc::new(SessionToken::new(Some("secret".into())));
        let client = client_with(tokens.clone());
        let url = client
            .endpoint(Resource::Users, None)
            .unwrap_or_else(|e| panic!("{e}"));

        let with_token = client
            .get_request(url.clone())
            .build()
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(with_token.headers()[AUTHORIZATION], "Bearer secret");

        tokens.clear();
        let without = client
            .get_request(url)
            .build()
            .unwrap_or_else(|e| panic!("{e}"));
        assert!(without.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn empty_object_body_means_not_found() {
        let result = record_from_body("{}", Resource::Posts, 999);
        assert!(matches!(
            result,
            Err(ClientError::NotFound { resource: Resource::Posts, id: 999 })
        ));
    }

    #[test]
    fn record_body_parses() {
        let result = record_from_body(r#"{"id":5,"title":"t"}"#, Resource::Posts, 5);
        assert!(matches!(result, Ok(ref r) if r.id() == 5));
    }

    #[test]
    fn non_object_body_is_parse_error() {
        let result = record_from_body("[]", Resource::Users, 1);
        assert!(matches!(result, Err(ClientError::ParseError { .. })));
    }
}
