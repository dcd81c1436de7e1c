//! Shared HTTP request handling
//!
//! Sending, status classification, logging and JSON parsing live here so that
//! every endpoint of [`ApiClient`](crate::ApiClient) goes through one path.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP status the demo API uses for unknown ids.
pub(crate) const STATUS_NOT_FOUND: u16 = 404;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Returns
    /// * `Ok((status, body))` for 2xx responses and for 404, which the caller
    ///   maps to [`ClientError::NotFound`] because only it knows the id
    /// * `Err(ClientError::Timeout)` when the request timed out
    /// * `Err(ClientError::NetworkError)` for transport failures and any other
    ///   non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    status: None,
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("Response Status: {status_code}");

        if !status.is_success() && status_code != STATUS_NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{method_name} {url} failed with HTTP {status_code}");
            return Err(ClientError::NetworkError {
                status: Some(status_code),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                status: Some(status_code),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<crate::Record>, ClientError> = HttpUtils::parse_json("<html>");
        assert!(
            matches!(&result, Err(ClientError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_rejects_records_without_id() {
        let result: Result<Vec<crate::Record>, ClientError> =
            HttpUtils::parse_json(r#"[{"id":1},{"title":"orphan"}]"#);
        assert!(matches!(result, Err(ClientError::ParseError { .. })));
    }
}
