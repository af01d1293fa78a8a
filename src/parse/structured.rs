//! Structured data extraction.
//!
//! This module extracts structured data from HTML documents including:
//! - JSON-LD script bodies (application/ld+json), unparsed
//! - Open Graph meta tags (og:*)
//! - Microdata `itemtype` declarations
//! - Schema.org `@type` values of parsed JSON-LD

use scraper::{Html, Selector};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(
        r#"script[type="application/ld+json" i]"#,
        "JSON-LD extraction",
    )
});

static OPEN_GRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(r#"meta[property^="og:"]"#, "Open Graph extraction")
});

static ITEMTYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback("[itemtype]", "microdata extraction"));

/// Returns the raw body of every `<script type="application/ld+json">`, in
/// document order.
///
/// Bodies are not parsed here: callers need to report malformed scripts
/// individually.
pub fn extract_json_ld_scripts(document: &Html) -> Vec<String> {
    document
        .select(&JSON_LD_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

/// Extracts Open Graph meta tags (`<meta property="og:*">`) as property/content pairs.
///
/// The first occurrence of a property wins.
pub fn extract_open_graph(document: &Html) -> HashMap<String, String> {
    let mut og_tags = HashMap::new();
    for element in document.select(&OPEN_GRAPH_SELECTOR) {
        if let (Some(property), Some(content)) = (
            element.value().attr("property"),
            element.value().attr("content"),
        ) {
            og_tags
                .entry(property.to_string())
                .or_insert_with(|| content.trim().to_string());
        }
    }
    og_tags
}

/// Extracts microdata types, reduced to the last path segment of each
/// `itemtype` URL (`https://schema.org/Product` becomes `Product`).
pub fn extract_microdata_types(document: &Html) -> Vec<String> {
    document
        .select(&ITEMTYPE_SELECTOR)
        .filter_map(|element| element.value().attr("itemtype"))
        .flat_map(|itemtype| itemtype.split_whitespace())
        .filter_map(|url| url.trim_end_matches('/').rsplit('/').next())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collects `@type` values from a parsed JSON-LD value.
///
/// Handles string and array `@type`, top-level arrays and `@graph` members.
pub fn schema_types_of(value: &Value) -> Vec<String> {
    let mut types = Vec::new();
    collect_types(value, &mut types);
    types
}

fn collect_types(value: &Value, types: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_types(item, types);
            }
        }
        Value::Object(obj) => {
            match obj.get("@type") {
                Some(Value::String(t)) => types.push(t.clone()),
                Some(Value::Array(ts)) => {
                    types.extend(ts.iter().filter_map(Value::as_str).map(str::to_string))
                }
                _ => {}
            }
            if let Some(graph) = obj.get("@graph") {
                collect_types(graph, types);
            }
        }
        _ => {}
    }
}
