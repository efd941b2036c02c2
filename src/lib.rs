//! Chat Tokenizer - Heuristic token estimation for chat messages
//!
//! This library estimates token counts for chat-style messages sent to a
//! language model and selects a counting strategy by model identifier. The
//! only strategy today is a heuristic counter (a fixed character-to-token
//! ratio); selection is structured so vocabulary-backed strategies can be
//! added without changing the [`Tokenizer`](tokenizer::Tokenizer) contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use chat_tokenizer::prelude::*;
//!
//! let tokenizer = select_tokenizer("gpt-4o", None);
//!
//! let text = tokenizer.count_tokens("Hello world");
//! assert_eq!(text.tokens, 3);
//!
//! let message = ChatMessage::text(Role::User, "Hello world");
//! assert_eq!(tokenizer.count_message_tokens(&message).tokens, 3);
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod tokenizer;

pub use config::Config;
pub use error::{Result, TokenizerError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, EstimatorConfig, TokenizerConfig};
    pub use crate::error::{Result, TokenizerError};
    pub use crate::message::{ChatMessage, ContentPart, MessageContent, Role};
    pub use crate::model::ModelInfo;
    pub use crate::tokenizer::{
        select_tokenizer, select_tokenizer_with_config, HeuristicTokenizer, TokenizationResult,
        Tokenizer, TokenizerKind,
    };
}
