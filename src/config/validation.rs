//! Configuration validation

use super::*;
use crate::error::{Result, TokenizerError};

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_tokenizer_config(&config.tokenizer)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate tokenizer configuration
fn validate_tokenizer_config(config: &TokenizerConfig) -> Result<()> {
    match config.estimator {
        EstimatorConfig::CharacterBased { chars_per_token } => {
            if !chars_per_token.is_finite() || chars_per_token <= 0.0 {
                return Err(TokenizerError::Config(
                    "chars_per_token must be a positive finite number".to_string(),
                ));
            }
        }
        EstimatorConfig::WordBased { words_per_token } => {
            if !words_per_token.is_finite() || words_per_token <= 0.0 {
                return Err(TokenizerError::Config(
                    "words_per_token must be a positive finite number".to_string(),
                ));
            }
        }
    }

    if config.message_overhead_tokens > 1024 {
        return Err(TokenizerError::Config(
            "Message overhead too large (max: 1024 tokens)".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.level.as_str()) {
        return Err(TokenizerError::Config(format!(
            "Unknown log level: {}",
            config.level
        )));
    }

    const FORMATS: [&str; 3] = ["json", "compact", "pretty"];
    if !FORMATS.contains(&config.format.as_str()) {
        return Err(TokenizerError::Config(format!(
            "Unknown log format: {}",
            config.format
        )));
    }

    Ok(())
}
