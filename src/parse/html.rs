//! Basic HTML extraction utilities.
//!
//! This module provides functions to extract head metadata:
//! - Page title
//! - Named meta tags (description, viewport, author)
//! - Canonical link
//! - Document language

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::utils::{normalize_whitespace, parse_selector_with_fallback};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("title", "title extraction"));

static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("link[rel='canonical']", "canonical extraction"));

static HTML_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("html", "lang extraction"));

/// Extracts the page title from an HTML document.
///
/// Returns the whitespace-normalized text of the first `<title>` element, or
/// `None` when the element is missing or empty.
pub fn extract_title(document: &Html) -> Option<String> {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| normalize_whitespace(&element.text().collect::<String>()));
    log::debug!("Extracted title: {:?}", title);
    title.filter(|t| !t.is_empty())
}

/// Extracts the `content` of `<meta name="{name}">`, trimmed.
///
/// The name match is case-insensitive. Empty content counts as missing.
pub fn extract_meta_content(document: &Html, name: &str) -> Option<String> {
    let selector = parse_selector_with_fallback(
        &format!("meta[name='{}' i]", name),
        "meta tag extraction",
    );
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Extracts the meta description from an HTML document.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    extract_meta_content(document, "description")
}

/// Extracts the `href` of `<link rel="canonical">`.
pub fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// Extracts the `lang` attribute of the root `<html>` element.
pub fn extract_lang(document: &Html) -> Option<String> {
    document
        .select(&HTML_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("lang"))
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
}
