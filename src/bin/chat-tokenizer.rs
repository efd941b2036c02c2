//! Chat Tokenizer Binary
//!
//! Reads either raw text or a JSON chat message from stdin and prints the
//! estimated token count as JSON. Intended for quick prompt-size checks from
//! shell pipelines.

use chat_tokenizer::{
    config::Config, message::ChatMessage, tokenizer::select_tokenizer_with_config,
};
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from file when one is given, defaults otherwise
    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => {
            let config = Config::from_file_with_env(&path)?;
            config
        }
        Err(_) => Config::default(),
    };
    config.validate()?;

    init_tracing(&config);
    info!("Configuration loaded and validated");

    let model_id = std::env::var("MODEL_ID").unwrap_or_else(|_| "default".to_string());
    let tokenizer = select_tokenizer_with_config(&model_id, None, config.tokenizer.clone());

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    // JSON payloads count as chat messages, anything else as raw text.
    let result = match serde_json::from_str::<ChatMessage>(&input) {
        Ok(message) => tokenizer.count_message_tokens(&message),
        Err(_) => tokenizer.count_tokens(input.trim_end()),
    };

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Initialize tracing with the configured level and format
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .json()
                .with_env_filter(filter)
                .init();
        }
        "compact" => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .compact()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .with_env_filter(filter)
                .init();
        }
    }
}
