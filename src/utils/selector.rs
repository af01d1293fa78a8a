//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that parses on every `selectors` version and matches no element.
const NEVER_MATCHING: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches nothing
/// (`*:not(*)`). A broken selector degrades one check instead of aborting the
/// audit.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "product detection")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        never_matching()
    })
}

fn never_matching() -> Selector {
    Selector::parse(NEVER_MATCHING).unwrap_or_else(|e| {
        panic!(
            "Fallback selector '{}' failed to parse: {}. This is a programming error.",
            NEVER_MATCHING, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_valid_selector_matches() {
        let doc = Html::parse_fragment(r#"<div class="price">$5</div>"#);
        let selector = parse_selector_with_fallback(".price", "test");
        assert_eq!(doc.select(&selector).count(), 1);
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = Html::parse_fragment(r#"<div class="price">$5</div>"#);
        let selector = parse_selector_with_fallback("div[[", "test");
        assert_eq!(doc.select(&selector).count(), 0);
    }
}
