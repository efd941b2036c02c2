//! Token estimation for chat messages

pub mod heuristic;
pub mod selection;

pub use heuristic::HeuristicTokenizer;
pub use selection::{select_tokenizer, select_tokenizer_with_config, TokenizerKind};

use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

/// Result of a token counting operation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizationResult {
    /// Estimated token count
    pub tokens: usize,
}

impl TokenizationResult {
    pub fn new(tokens: usize) -> Self {
        Self { tokens }
    }
}

/// Trait for token counting strategies
///
/// Implementations are stateless apart from immutable configuration, so a
/// single instance is safe to share across threads. Both operations are total:
/// they accept any text or message and cannot fail.
pub trait Tokenizer: Send + Sync {
    /// Count tokens in arbitrary text
    fn count_tokens(&self, text: &str) -> TokenizationResult;

    /// Count tokens across a chat message
    ///
    /// String content delegates to [`Tokenizer::count_tokens`]; part-list
    /// content sums the counts of text-bearing parts, with non-text parts
    /// contributing zero.
    fn count_message_tokens(&self, message: &ChatMessage) -> TokenizationResult;
}
