//! HTTP client construction for the messages endpoint.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use crate::client::ClientError;
use crate::options::ResolvedConfig;

/// Value of the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Path of the messages endpoint, relative to the base URL.
pub const MESSAGES_PATH: &str = "/v1/messages";

/// Build an HTTP client carrying the auth, version and content-type headers
/// and the configured timeout.
///
/// No connection is opened here.
pub fn build_http_client(config: &ResolvedConfig) -> Result<Client, ClientError> {
    let mut headers = HeaderMap::new();
    let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
        .map_err(|_| ClientError::Config("API key is not a valid header value".to_string()))?;
    api_key.set_sensitive(true);
    headers.insert("x-api-key", api_key);
    headers.insert(
        "anthropic-version",
        HeaderValue::from_static(ANTHROPIC_VERSION),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(Client::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .build()?)
}

/// Full URL of the messages endpoint for `base_url`.
pub fn messages_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), MESSAGES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{SecretString, DEFAULT_MODEL};
    use std::time::Duration;

    fn config(api_key: &str) -> ResolvedConfig {
        ResolvedConfig {
            api_key: SecretString::new(api_key.to_string()),
            base_url: "https://api.anthropic.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1024,
            timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&config("sk-test")).is_ok());
    }

    #[test]
    fn test_build_http_client_rejects_bad_key() {
        let err = build_http_client(&config("bad\nkey")).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_messages_url_trailing_slash() {
        assert_eq!(
            messages_url("https://api.anthropic.com/"),
            "https://api.anthropic.com/v1/messages"
        );
        assert_eq!(
            messages_url("https://open.bigmodel.cn/api/anthropic"),
            "https://open.bigmodel.cn/api/anthropic/v1/messages"
        );
    }
}
