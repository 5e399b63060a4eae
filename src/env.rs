//! Environment lookup used as the fallback layer of configuration resolution.

use std::collections::HashMap;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ANTHROPIC_AUTH_TOKEN";

/// Environment variable holding the base URL.
pub const BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

/// Source of environment values.
///
/// `Client::new` reads the process environment; tests and embedders can pass
/// any snapshot instead.
pub trait Env {
    /// Look up `key`. Empty values are reported as unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl Env for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

impl Env for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }
}
