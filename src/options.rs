//! Client configuration, defaulting, and per-call overrides.

use std::time::Duration;

use crate::client::ClientError;
use crate::env::{Env, API_KEY_VAR, BASE_URL_VAR};

/// Default API endpoint of the primary provider.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default cap on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A secret string type for sensitive data like API keys.
/// Prevents accidental logging or display of secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Create a new secret string.
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Get the underlying secret value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

/// Caller-supplied configuration. Any field may be left unset.
///
/// Empty strings and zero values count as unset, so they are filled in by
/// [`Config::resolve`] like `None`.
///
/// # Example
/// ```rust
/// use claude_lite::options::Config;
/// use std::time::Duration;
///
/// let config = Config::new()
///     .with_api_key("sk-ant-...")
///     .with_model("claude-3-5-haiku-20241022")
///     .with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// API key sent as `x-api-key`. Falls back to `ANTHROPIC_AUTH_TOKEN`.
    pub api_key: Option<SecretString>,

    /// Root URL of the API. Falls back to `ANTHROPIC_BASE_URL`, then
    /// [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,

    /// Model identifier
    pub model: Option<String>,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Request timeout
    pub timeout: Option<Duration>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fill every unset field and validate the result.
    ///
    /// Per field the first non-empty source wins: the explicit value, then
    /// the environment (API key and base URL only), then the built-in
    /// default. The API key has no default.
    pub fn resolve(self, env: &impl Env) -> Result<ResolvedConfig, ClientError> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| env.var(API_KEY_VAR).map(SecretString::new))
            .ok_or_else(|| {
                ClientError::Config(format!(
                    "API key not set (set Config::api_key or the {} environment variable)",
                    API_KEY_VAR
                ))
            })?;

        let base_url = self
            .base_url
            .filter(|u| !u.is_empty())
            .or_else(|| env.var(BASE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(ResolvedConfig {
            api_key,
            base_url,
            model: self
                .model
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: self
                .max_tokens
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_MAX_TOKENS),
            timeout: self
                .timeout
                .filter(|t| !t.is_zero())
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

/// Fully populated configuration held by a [`Client`](crate::client::Client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ResolvedConfig {
    /// Copy of this configuration with `options` applied in order.
    pub fn with_overrides(&self, options: &[CallOption]) -> ResolvedConfig {
        let mut config = self.clone();
        for option in options {
            option.apply(&mut config);
        }
        config
    }
}

impl From<ResolvedConfig> for Config {
    fn from(resolved: ResolvedConfig) -> Self {
        Config {
            api_key: Some(resolved.api_key),
            base_url: Some(resolved.base_url),
            model: Some(resolved.model),
            max_tokens: Some(resolved.max_tokens),
            timeout: Some(resolved.timeout),
        }
    }
}

/// A call-scoped override of one configuration field.
///
/// Options passed to a call are applied in order; a later option wins over an
/// earlier one touching the same field. The client's stored configuration is
/// never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOption {
    Model(String),
    MaxTokens(u32),
    Timeout(Duration),
}

impl CallOption {
    fn apply(&self, config: &mut ResolvedConfig) {
        match self {
            CallOption::Model(model) => config.model = model.clone(),
            CallOption::MaxTokens(max_tokens) => config.max_tokens = *max_tokens,
            CallOption::Timeout(timeout) => config.timeout = *timeout,
        }
    }
}

/// Override the model for one call.
pub fn with_model(model: impl Into<String>) -> CallOption {
    CallOption::Model(model.into())
}

/// Override the max-tokens cap for one call.
pub fn with_max_tokens(max_tokens: u32) -> CallOption {
    CallOption::MaxTokens(max_tokens)
}

/// Override the request timeout for one call.
pub fn with_timeout(timeout: Duration) -> CallOption {
    CallOption::Timeout(timeout)
}
