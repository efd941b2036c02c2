//! Heuristic token estimation
//!
//! Approximates token counts from a fixed character-to-token (or
//! word-to-token) ratio without loading any vocabulary.

use super::{TokenizationResult, Tokenizer};
use crate::config::{EstimatorConfig, TokenizerConfig};
use crate::message::{ChatMessage, ContentPart, MessageContent};

/// Heuristic tokenizer backed by a fixed ratio
///
/// The default configuration uses four characters per token, rounded up.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTokenizer {
    config: TokenizerConfig,
}

impl HeuristicTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    fn estimate(&self, text: &str) -> usize {
        match self.config.estimator {
            EstimatorConfig::CharacterBased { chars_per_token } => {
                let char_count = text.chars().count();
                (char_count as f32 / chars_per_token).ceil() as usize
            }
            EstimatorConfig::WordBased { words_per_token } => {
                let word_count = text.split_whitespace().count();
                (word_count as f32 / words_per_token).ceil() as usize
            }
        }
    }

    /// Estimate token counts for multiple texts
    pub fn estimate_batch(&self, texts: &[String]) -> Vec<usize> {
        texts.iter().map(|text| self.estimate(text)).collect()
    }
}

impl Tokenizer for HeuristicTokenizer {
    fn count_tokens(&self, text: &str) -> TokenizationResult {
        TokenizationResult::new(self.estimate(text))
    }

    fn count_message_tokens(&self, message: &ChatMessage) -> TokenizationResult {
        let content_tokens = match &message.content {
            MessageContent::Text(text) => self.estimate(text),
            MessageContent::Parts(parts) => parts
                .iter()
                .map(|part| match part {
                    ContentPart::Text { value } => self.estimate(value),
                    // Non-text parts count zero; callers budget their own
                    // margin for images.
                    ContentPart::Image { .. } | ContentPart::Other => 0,
                })
                .sum(),
        };

        TokenizationResult::new(content_tokens + self.config.message_overhead_tokens)
    }
}
