//! Single and multi-turn prompts against the messages API.
//!
//! Run with:
//! ```bash
//! export ANTHROPIC_AUTH_TOKEN="your-api-key"
//! RUST_LOG=claude_lite=debug cargo run --example simple_prompt
//! ```
//!
//! Pass `--zhipu` to use the Zhipu preset, which also needs
//! `ANTHROPIC_BASE_URL`.

use claude_lite::options::{with_max_tokens, Config};
use claude_lite::providers::zhipu_client;
use claude_lite::{Client, Message};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = if std::env::args().any(|arg| arg == "--zhipu") {
        zhipu_client()?
    } else {
        Client::new(Config::new())?
    };

    println!("Sending request to {}...", client.config().base_url);

    match client
        .simple_prompt(
            "What is the capital of France? Answer in one word.",
            &[with_max_tokens(16)],
        )
        .await
    {
        Ok(answer) => println!("\n=== Response ===\n{}", answer),
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(e.into());
        }
    }

    println!("\n\n=== Multi-turn conversation ===");

    let conversation = vec![
        Message::user("My name is Alice."),
        Message::assistant("Hello Alice! Nice to meet you."),
        Message::user("What's my name?"),
    ];

    let response = client.create_message(&conversation, &[]).await?;
    for (i, block) in response.content.iter().enumerate() {
        println!("Block {} ({}): {:?}", i + 1, block.block_type, block.text);
    }

    Ok(())
}
