//! The messages client and its error type.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::env::{Env, ProcessEnv};
use crate::http::{build_http_client, messages_url};
use crate::model::{ErrorResponse, Message, MessagesRequest, Response};
use crate::options::{CallOption, Config, ResolvedConfig};

/// Errors that can occur during client operations.
///
/// `Config` is raised at construction time. Every other variant comes from a
/// request and is returned to the caller as-is; nothing is retried.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed: invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("request failed: HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("no text content in response")]
    NoTextContent,
}

impl ClientError {
    /// Whether this error came from configuration resolution.
    pub fn is_config(&self) -> bool {
        matches!(self, ClientError::Config(_))
    }

    /// Whether this error came from a request.
    pub fn is_request(&self) -> bool {
        !self.is_config()
    }
}

/// Client for the messages endpoint.
///
/// Holds the resolved configuration and a reusable HTTP client. Cloning is
/// cheap and clones share the connection pool.
///
/// # Example
/// ```no_run
/// use claude_lite::client::Client;
/// use claude_lite::options::{with_max_tokens, Config};
///
/// # async fn run() -> Result<(), claude_lite::ClientError> {
/// let client = Client::new(Config::new().with_api_key("sk-ant-..."))?;
/// let answer = client
///     .simple_prompt("What is the capital of France?", &[with_max_tokens(64)])
///     .await?;
/// println!("{}", answer);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ResolvedConfig,
    http: reqwest::Client,
}

impl Client {
    /// Create a client, falling back to the process environment for unset
    /// fields.
    pub fn new(config: Config) -> Result<Self, ClientError> {
        Self::with_env(config, &ProcessEnv)
    }

    /// Create a client, falling back to `env` for unset fields.
    pub fn with_env(config: Config, env: &impl Env) -> Result<Self, ClientError> {
        let config = config.resolve(env)?;
        let http = build_http_client(&config)?;

        debug!(
            base_url = %config.base_url,
            model = %config.model,
            max_tokens = config.max_tokens,
            timeout = ?config.timeout,
            "Created messages client"
        );

        Ok(Self { config, http })
    }

    /// The configuration every call starts from.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Send a conversation and return the decoded response.
    ///
    /// `options` override the stored configuration for this call only, in
    /// order.
    pub async fn create_message(
        &self,
        messages: &[Message],
        options: &[CallOption],
    ) -> Result<Response, ClientError> {
        let config = self.config.with_overrides(options);

        let body = serde_json::to_vec(&MessagesRequest {
            model: &config.model,
            max_tokens: config.max_tokens,
            messages,
        })?;

        debug!(
            model = %config.model,
            max_tokens = config.max_tokens,
            messages = messages.len(),
            "Calling messages endpoint"
        );

        let response = self
            .http
            .post(messages_url(&config.base_url))
            .timeout(config.timeout)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "HTTP request failed");
                ClientError::Http(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            debug!(error = %e, "Failed to read response body");
            ClientError::Http(e)
        })?;

        if !status.is_success() {
            let err = Self::handle_error_response(status, &bytes);
            debug!(status = %status, error = %err, "API error");
            return Err(err);
        }

        let response: Response = serde_json::from_slice(&bytes).map_err(|e| {
            debug!(error = %e, "Failed to parse response");
            ClientError::Parse(e)
        })?;

        debug!(blocks = response.content.len(), "Response received");
        Ok(response)
    }

    /// Send a single user prompt and return the text of the first text block.
    pub async fn simple_prompt(
        &self,
        prompt: &str,
        options: &[CallOption],
    ) -> Result<String, ClientError> {
        let messages = [Message::user(prompt)];
        let response = self.create_message(&messages, options).await?;

        response
            .text()
            .map(str::to_string)
            .ok_or(ClientError::NoTextContent)
    }

    fn handle_error_response(status: StatusCode, body: &[u8]) -> ClientError {
        let message = match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(envelope) => format!("{}: {}", envelope.error.error_type, envelope.error.message),
            Err(_) => String::from_utf8_lossy(body).into_owned(),
        };
        ClientError::Api { status, message }
    }
}
