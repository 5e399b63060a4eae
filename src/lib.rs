//! # claude-lite - Minimal Messages API Client
//!
//! A small client for Anthropic-style `/v1/messages` endpoints, with a preset
//! for Zhipu GLM's compatible endpoint.
//!
//! ## Features
//! - Async, tokio compatible
//! - Configuration with environment fallback and built-in defaults
//! - Call-scoped overrides that never change the client's defaults
//! - One request per call: no streaming, no retries
//!
//! ## Configuration
//!
//! Unset fields of [`Config`] are filled from `ANTHROPIC_AUTH_TOKEN` (API key)
//! and `ANTHROPIC_BASE_URL` (base URL), then from the defaults in
//! [`options`]. The API key has no default.
//!
//! ## Example
//! ```no_run
//! use claude_lite::client::Client;
//! use claude_lite::model::Message;
//! use claude_lite::options::{with_model, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config::new())?;
//!
//!     // Single turn
//!     let answer = client.simple_prompt("Hello!", &[]).await?;
//!     println!("{}", answer);
//!
//!     // Multi turn, with a different model for this call only
//!     let messages = vec![
//!         Message::user("My name is Alice."),
//!         Message::assistant("Hello Alice!"),
//!         Message::user("What's my name?"),
//!     ];
//!     let response = client
//!         .create_message(&messages, &[with_model("claude-3-5-haiku-20241022")])
//!         .await?;
//!     println!("{:?}", response.text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod env;
pub mod http;
pub mod model;
pub mod options;
pub mod providers;

// Re-exports for convenience
pub use client::{Client, ClientError};
pub use model::{ContentBlock, Message, Response, Role};
pub use options::{with_max_tokens, with_model, with_timeout, CallOption, Config};
