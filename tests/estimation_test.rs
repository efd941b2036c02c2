//! Integration tests for the chat tokenizer
//!
//! These exercise the public API end to end: configuration, tokenizer
//! selection, and counting over host-shaped JSON payloads. No external
//! services are required.

use chat_tokenizer::prelude::*;
use std::sync::Arc;

#[test]
fn test_selection_then_counting_round() {
    let tokenizer = select_tokenizer("gpt-4o", None);

    assert_eq!(tokenizer.count_tokens("").tokens, 0);
    assert_eq!(tokenizer.count_tokens("abcd").tokens, 1);
    assert_eq!(tokenizer.count_tokens("abcdefgh").tokens, 2);
}

#[test]
fn test_host_payload_with_string_content() {
    let payload = r#"{"role": "user", "content": "Hello world"}"#;
    let message: ChatMessage = serde_json::from_str(payload).expect("valid payload");

    let tokenizer = select_tokenizer("claude-sonnet", None);
    assert_eq!(
        tokenizer.count_message_tokens(&message),
        tokenizer.count_tokens("Hello world")
    );
}

#[test]
fn test_host_payload_with_mixed_parts() {
    let payload = r#"{
        "role": "user",
        "content": [
            {"type": "text", "value": "abcd"},
            {"type": "image", "media_type": "image/png", "data": "iVBORw0KGgo="},
            {"type": "text", "value": "abcdefgh"},
            {"type": "audio"}
        ]
    }"#;
    let message: ChatMessage = serde_json::from_str(payload).expect("valid payload");

    let tokenizer = select_tokenizer("gpt-4o", None);
    // Only the two text parts count: ceil(4/4) + ceil(8/4).
    assert_eq!(tokenizer.count_message_tokens(&message).tokens, 3);
}

#[test]
fn test_message_count_equals_sum_over_parts() {
    let parts = vec![
        ContentPart::Text {
            value: "first part".to_string(),
        },
        ContentPart::Text {
            value: "and a somewhat longer second part".to_string(),
        },
    ];

    let tokenizer = select_tokenizer("any-model", None);
    let summed: usize = parts
        .iter()
        .filter_map(ContentPart::text_value)
        .map(|text| tokenizer.count_tokens(text).tokens)
        .sum();

    let message = ChatMessage::parts(Role::User, parts);
    assert_eq!(tokenizer.count_message_tokens(&message).tokens, summed);
}

#[test]
fn test_overhead_from_config_applied_per_message() {
    let mut config = Config::default();
    config.tokenizer.message_overhead_tokens = 4;
    config.validate().expect("config should validate");

    let tokenizer = select_tokenizer_with_config("gpt-4o", None, config.tokenizer);
    let message = ChatMessage::text(Role::System, "abcd");

    assert_eq!(tokenizer.count_message_tokens(&message).tokens, 5);
    // Raw text counting carries no overhead.
    assert_eq!(tokenizer.count_tokens("abcd").tokens, 1);
}

#[test]
fn test_model_info_does_not_change_strategy() {
    let info: ModelInfo = serde_json::from_str(
        r#"{"name": "gpt-4o", "family": "gpt", "context_window": 128000, "max_output_tokens": 16384}"#,
    )
    .expect("valid model info");

    let with_info = select_tokenizer("gpt-4o", Some(&info));
    let without_info = select_tokenizer("gpt-4o", None);

    for text in ["", "short", "a considerably longer piece of input text"] {
        assert_eq!(with_info.count_tokens(text), without_info.count_tokens(text));
    }
}

#[test]
fn test_tokenizer_shared_across_threads() {
    let tokenizer: Arc<dyn Tokenizer> = Arc::from(select_tokenizer("gpt-4o", None));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokenizer = tokenizer.clone();
            std::thread::spawn(move || tokenizer.count_tokens("concurrent input").tokens)
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_word_based_config_end_to_end() {
    let config = TokenizerConfig {
        estimator: EstimatorConfig::WordBased {
            words_per_token: 1.3,
        },
        message_overhead_tokens: 0,
    };

    let tokenizer = select_tokenizer_with_config("legacy-model", None, config);
    // 3 words / 1.3 -> 3
    assert_eq!(tokenizer.count_tokens("Hello world test").tokens, 3);
}

#[test]
fn test_result_serializes_for_host() {
    let tokenizer = select_tokenizer("gpt-4o", None);
    let result = tokenizer.count_tokens("abcdefgh");

    let json = serde_json::to_string(&result).expect("serializable");
    assert_eq!(json, r#"{"tokens":2}"#);
}
