//! Zhipu GLM through its Anthropic-compatible endpoint.
//!
//! Unlike [`Client::new`], the preset has no built-in base URL: both the key
//! and the endpoint must come from `ANTHROPIC_AUTH_TOKEN` and
//! `ANTHROPIC_BASE_URL`.

use tracing::debug;

use crate::client::{Client, ClientError};
use crate::env::{Env, ProcessEnv, API_KEY_VAR, BASE_URL_VAR};
use crate::options::{Config, SecretString, DEFAULT_MAX_TOKENS, DEFAULT_TIMEOUT};

/// Model used by the Zhipu preset.
pub const ZHIPU_MODEL: &str = "glm-4.5-flash";

/// Create a Zhipu client from the process environment.
pub fn zhipu_client() -> Result<Client, ClientError> {
    zhipu_client_with_env(&ProcessEnv)
}

/// Create a Zhipu client from `env`.
///
/// Fails naming the first missing variable, the API key being checked first.
pub fn zhipu_client_with_env(env: &impl Env) -> Result<Client, ClientError> {
    let api_key = env
        .var(API_KEY_VAR)
        .ok_or_else(|| ClientError::Config(format!("{} not set", API_KEY_VAR)))?;
    let base_url = env
        .var(BASE_URL_VAR)
        .ok_or_else(|| ClientError::Config(format!("{} not set", BASE_URL_VAR)))?;

    debug!(base_url = %base_url, model = ZHIPU_MODEL, "Using Zhipu preset");

    let config = Config {
        api_key: Some(SecretString::new(api_key)),
        base_url: Some(base_url),
        model: Some(ZHIPU_MODEL.to_string()),
        max_tokens: Some(DEFAULT_MAX_TOKENS),
        timeout: Some(DEFAULT_TIMEOUT),
    };
    Client::with_env(config, env)
}

/// Fill unset fields of `config` with the Zhipu defaults from the process
/// environment.
pub fn with_zhipu_defaults(config: Config) -> Config {
    with_zhipu_defaults_from(config, &ProcessEnv)
}

/// Fill unset base URL and API key from `env` and an unset model with
/// [`ZHIPU_MODEL`].
///
/// Nothing is validated and no client is built; fields still missing are
/// reported when the config is passed to [`Client::new`].
pub fn with_zhipu_defaults_from(mut config: Config, env: &impl Env) -> Config {
    if config.base_url.as_deref().map_or(true, str::is_empty) {
        config.base_url = env.var(BASE_URL_VAR);
    }
    if config.model.as_deref().map_or(true, str::is_empty) {
        config.model = Some(ZHIPU_MODEL.to_string());
    }
    if config
        .api_key
        .as_ref()
        .map_or(true, |k| k.expose_secret().is_empty())
    {
        config.api_key = env.var(API_KEY_VAR).map(SecretString::new);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_requires_base_url_even_with_key() {
        let env = HashMap::from([(API_KEY_VAR, "sk")]);
        let err = zhipu_client_with_env(&env).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains(BASE_URL_VAR));
    }

    #[test]
    fn test_requires_key_even_with_base_url() {
        let env = HashMap::from([(BASE_URL_VAR, "https://open.bigmodel.cn/api/anthropic")]);
        let err = zhipu_client_with_env(&env).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_preset_configuration() {
        let env = HashMap::from([
            (API_KEY_VAR, "sk-glm"),
            (BASE_URL_VAR, "https://open.bigmodel.cn/api/anthropic"),
        ]);
        let client = zhipu_client_with_env(&env).unwrap();
        let config = client.config();
        assert_eq!(config.model, ZHIPU_MODEL);
        assert_eq!(config.base_url, "https://open.bigmodel.cn/api/anthropic");
        assert_eq!(config.api_key.expose_secret(), "sk-glm");
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_defaults_fill_unset_fields() {
        let env = HashMap::from([(API_KEY_VAR, "sk-env"), (BASE_URL_VAR, "http://env")]);
        let config = with_zhipu_defaults_from(Config::new(), &env);
        assert_eq!(config.base_url.as_deref(), Some("http://env"));
        assert_eq!(config.model.as_deref(), Some(ZHIPU_MODEL));
        assert_eq!(
            config.api_key.as_ref().map(SecretString::expose_secret),
            Some("sk-env")
        );
        assert_eq!(config.max_tokens, None);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_defaults_keep_explicit_fields() {
        let env = HashMap::from([(API_KEY_VAR, "sk-env"), (BASE_URL_VAR, "http://env")]);
        let explicit = Config::new()
            .with_api_key("sk-mine")
            .with_base_url("http://mine")
            .with_model("glm-4.5");
        assert_eq!(with_zhipu_defaults_from(explicit.clone(), &env), explicit);
    }

    #[test]
    fn test_defaults_without_env_leave_gaps() {
        let env: HashMap<&str, &str> = HashMap::new();
        let config = with_zhipu_defaults_from(Config::new(), &env);
        assert_eq!(config.base_url, None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.model.as_deref(), Some(ZHIPU_MODEL));
    }

    #[test]
    fn test_process_env_defaults_keep_explicit_fields() {
        let explicit = Config::new()
            .with_api_key("sk-mine")
            .with_base_url("http://mine")
            .with_model("glm-4.5");
        assert_eq!(with_zhipu_defaults(explicit.clone()), explicit);

        let filled = with_zhipu_defaults(Config::new().with_api_key("sk").with_base_url("http://b"));
        assert_eq!(filled.model.as_deref(), Some(ZHIPU_MODEL));
    }

    #[tokio::test]
    async fn test_preset_sends_glm_model() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "sk-glm"))
            .and(body_partial_json(json!({ "model": ZHIPU_MODEL })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "你好"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let env = HashMap::from([(API_KEY_VAR, "sk-glm"), (BASE_URL_VAR, uri.as_str())]);
        let client = zhipu_client_with_env(&env).unwrap();
        assert_eq!(client.simple_prompt("hello", &[]).await.unwrap(), "你好");
    }
}
