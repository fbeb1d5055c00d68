const MAX_VISIBLE_CHARS: usize = 80;

/// Sanitizes utterance text for safe logging. Truncation is char-based, not
/// byte-based: inputs are frequently Devanagari or Telugu script where byte
/// slicing would split a code point.
pub fn sanitize_utterance(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    }
}
