//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use tabula_client::ClientError;
use tabula_client::Resource;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Transport failure, timeout or non-2xx response
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Record id absent upstream
    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: u64 },

    /// Upstream answered with something that is not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Bad configuration (base URL and the like)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Session store failure
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (resource does not exist, bad configuration, etc.);
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ConfigError(_))
    }

    /// Log this error at the level [`is_expected`](Self::is_expected) picks.
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound { resource, id } => Self::NotFound { resource, id },
            ClientError::NetworkError { detail, .. } | ClientError::Timeout { detail } => {
                Self::NetworkError(detail)
            }
            ClientError::ParseError { detail } => Self::InvalidResponse(detail),
            ClientError::InvalidUrl { url, detail } => {
                Self::ConfigError(format!("{url}: {detail}"))
            }
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
