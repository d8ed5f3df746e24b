//! The free-text question carried from the landing screen.

/// Shown when a chat screen is opened without a question.
pub const DEFAULT_PROMPT: &str = "What datasets should I analyze?";

/// Validate a submitted question. Blank input yields `None`, meaning the
/// landing screen stays put.
pub fn submit(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// The question to display, falling back to [`DEFAULT_PROMPT`].
pub fn carried(prompt: Option<&str>) -> &str {
    prompt.unwrap_or(DEFAULT_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_submit_is_rejected() {
        assert_eq!(submit(""), None);
        assert_eq!(submit("   \t\n"), None);
    }

    #[test]
    fn test_submit_keeps_text() {
        assert_eq!(
            submit(" trending stocks "),
            Some(" trending stocks ".to_string())
        );
    }

    #[test]
    fn test_carried_default() {
        assert_eq!(carried(None), "What datasets should I analyze?");
        assert_eq!(carried(Some("stocks")), "stocks");
    }
}
