//! Tokenizer selection by model identifier

use tracing::debug;

use super::{HeuristicTokenizer, Tokenizer};
use crate::config::TokenizerConfig;
use crate::model::ModelInfo;

/// Closed set of counting strategies
///
/// Vocabulary-backed strategies get their own variant here when they land;
/// the [`Tokenizer`] contract stays unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// Fixed character-to-token ratio, no vocabulary
    Heuristic,
}

/// Resolve the counting strategy for a model
///
/// Every model family maps to the heuristic today; the identifier and
/// metadata are accepted so future family-specific dispatch does not change
/// the call sites.
fn resolve_kind(_model_id: &str, _model_info: Option<&ModelInfo>) -> TokenizerKind {
    TokenizerKind::Heuristic
}

/// Select the tokenizer to use for a model
///
/// Pure factory; never fails. Returns a fresh instance with default
/// configuration.
pub fn select_tokenizer(model_id: &str, model_info: Option<&ModelInfo>) -> Box<dyn Tokenizer> {
    select_tokenizer_with_config(model_id, model_info, TokenizerConfig::default())
}

/// Select the tokenizer to use for a model, with explicit configuration
pub fn select_tokenizer_with_config(
    model_id: &str,
    model_info: Option<&ModelInfo>,
    config: TokenizerConfig,
) -> Box<dyn Tokenizer> {
    let kind = resolve_kind(model_id, model_info);
    debug!(
        model = model_id,
        family = model_info.map(ModelInfo::family_or_name),
        strategy = ?kind,
        "selected tokenizer"
    );

    match kind {
        TokenizerKind::Heuristic => Box::new(HeuristicTokenizer::new(config)),
    }
}
