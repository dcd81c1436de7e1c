use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Resource;

/// Unified error type for all API client operations.
///
/// Every fetch performs a single attempt. None of these variants are retried
/// by the client; callers translate them into a view-level error state.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// Transport failure (DNS, connection refused, TLS) or a non-2xx status
    /// other than 404.
    #[error("Network error: {detail}")]
    NetworkError {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The requested record does not exist upstream.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource that was queried.
        resource: Resource,
        /// Requested record id.
        id: u64,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse response: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The configured base URL, or a URL derived from it, is malformed.
    #[error("Invalid URL '{url}': {detail}")]
    InvalidUrl {
        /// Offending URL text.
        url: String,
        /// Parser message.
        detail: String,
    },
}

impl ClientError {
    /// Whether this is expected behaviour (missing record, bad input), used
    /// to pick the log level.
    ///
    /// Returns `true` for `warn`, `false` for `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidUrl { .. })
    }

    /// Whether the failure happened on the wire (no usable response).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

/// Client layer `Result` alias.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_expected() {
        let e = ClientError::NotFound {
            resource: Resource::Posts,
            id: 999,
        };
        assert!(e.is_expected());
        assert!(!e.is_transport());
        assert_eq!(e.to_string(), "posts 999 not found");
    }

    #[test]
    fn network_error_is_not_expected() {
        let e = ClientError::NetworkError {
            status: Some(500),
            detail: "HTTP 500".into(),
        };
        assert!(!e.is_expected());
        assert!(e.is_transport());
    }

    #[test]
    fn timeout_is_transport() {
        let e = ClientError::Timeout {
            detail: "deadline".into(),
        };
        assert!(e.is_transport());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ClientError::ParseError {
            detail: "eof".into(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "ParseError");
        assert_eq!(json["detail"], "eof");
    }
}
