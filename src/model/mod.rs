//! Model metadata supplied by the host model registry
//!
//! These shapes are consumed as-is; the registry itself lives in the host.

use serde::{Deserialize, Serialize};

/// Metadata describing a language model's capabilities and limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Human-readable model name
    pub name: String,

    /// Model family (e.g. "gpt", "claude"), when the registry reports one
    #[serde(default)]
    pub family: Option<String>,

    /// Context window size in tokens
    #[serde(default)]
    pub context_window: Option<usize>,

    /// Maximum output tokens per response
    #[serde(default)]
    pub max_output_tokens: Option<usize>,
}

impl ModelInfo {
    /// Family string when present, otherwise the model name
    pub fn family_or_name(&self) -> &str {
        self.family.as_deref().unwrap_or(&self.name)
    }
}
