//! String utilities for the domain layer.

/// Count whitespace-delimited words, ignoring empty segments
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("  leading and   trailing  "), 3);
        assert_eq!(word_count("line\nbreaks\tand tabs"), 4);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "日本語" is 9 bytes; target 5 backs off to the boundary at 3
        assert_eq!(truncate("日本語", 20), "日本語");
        assert_eq!(truncate("日本語", 8), "日...");
    }
}
