//! Presets for providers that serve the messages API.

pub mod zhipu;

// Re-export for convenience
pub use zhipu::{with_zhipu_defaults, zhipu_client};
