//! Tree-walking helpers over `scraper` documents.

use scraper::{ElementRef, Html};

use super::selector::parse_selector_with_fallback;
use super::text::{contains_any, element_text};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// Heading level (1-6) of an element, or `None` for non-headings.
pub fn heading_level(element: &ElementRef<'_>) -> Option<u8> {
    match element.value().name() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Element siblings that follow `start`, stopping at the next heading.
pub fn siblings_until_heading(start: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    start
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| heading_level(el).is_none())
        .collect()
}

/// First heading whose text contains one of `keywords` (lowercase).
pub fn find_heading<'a>(document: &'a Html, keywords: &[&str]) -> Option<ElementRef<'a>> {
    let selector = parse_selector_with_fallback(HEADING_SELECTOR, "heading lookup");
    document
        .select(&selector)
        .find(|h| contains_any(&element_text(h), keywords))
}

/// Texts of the list items and paragraphs in the section under a keyword heading.
///
/// Lists contribute one entry per `<li>`; paragraphs contribute their text.
/// Wrapper elements contribute their nested list items, or failing that their
/// paragraphs.
pub fn section_items(document: &Html, keywords: &[&str]) -> Vec<String> {
    let Some(heading) = find_heading(document, keywords) else {
        return Vec::new();
    };

    let li = parse_selector_with_fallback("li", "section items");
    let p = parse_selector_with_fallback("p", "section items");

    let mut items = Vec::new();
    for sibling in siblings_until_heading(heading) {
        match sibling.value().name() {
            "ul" | "ol" => items.extend(sibling.select(&li).map(|el| element_text(&el))),
            "p" => items.push(element_text(&sibling)),
            _ => {
                let nested: Vec<String> = sibling.select(&li).map(|el| element_text(&el)).collect();
                if nested.is_empty() {
                    items.extend(sibling.select(&p).map(|el| element_text(&el)));
                } else {
                    items.extend(nested);
                }
            }
        }
    }
    items.retain(|s| !s.is_empty());
    items
}
