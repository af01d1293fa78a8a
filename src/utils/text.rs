//! Text normalization helpers shared by the generator and the audit.

use scraper::ElementRef;

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of an element, whitespace-normalized.
pub fn element_text(element: &ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Length in characters (not bytes), matching how editors count headline length.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Returns `Some(text)` when the trimmed text is non-empty.
pub fn non_empty(text: impl AsRef<str>) -> Option<String> {
    let trimmed = text.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive "contains any of" check.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Deal \n\t of   the day "), "Deal of the day");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("café"), 4);
        assert_eq!("café".len(), 5);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  x "), Some("x".to_string()));
        assert_eq!(non_empty("   "), None);
    }

    #[test]
    fn test_contains_any_is_case_insensitive() {
        assert!(contains_any("Now SOLD OUT", &["sold out"]));
        assert!(!contains_any("In stock", &["sold out", "out of stock"]));
    }
}
