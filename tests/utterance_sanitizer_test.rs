use vaani::infrastructure::observability::sanitize_utterance;

#[test]
fn given_empty_text_then_placeholder_returned() {
    assert_eq!(sanitize_utterance(""), "[EMPTY]");
    assert_eq!(sanitize_utterance("   \n"), "[EMPTY]");
}

#[test]
fn given_short_text_then_returned_trimmed() {
    assert_eq!(sanitize_utterance("  hello  "), "hello");
    assert_eq!(sanitize_utterance("ధన్యవాదాలు"), "ధన్యవాదాలు");
}

#[test]
fn given_long_multibyte_text_then_truncated_on_char_boundary() {
    let text = "పంటలకు ఏ ఎరువు వేయాలి అని ".repeat(10);
    let sanitized = sanitize_utterance(&text);

    assert!(sanitized.contains("chars total"));
    assert!(sanitized.chars().count() < text.chars().count());
}

#[test]
fn given_text_at_limit_then_not_truncated() {
    let text = "a".repeat(80);
    assert_eq!(sanitize_utterance(&text), text);
}
